//! Folder creation form.
//!
//! A single text field and submit button. Validation beyond emptiness is
//! the backend's job; whatever it rejects comes back as feedback next to
//! the form, and the listing stays as it was.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use super::feedback_note::FeedbackNote;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/create_folder.module.css");

#[component]
pub fn CreateFolderForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (name, set_name) = signal(String::new());

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_name.set(input.value());
    };

    // The field keeps its value on failure so the name can be corrected; a
    // success navigates away and remounts the form empty.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        ctx.browser.create_folder(name.get());
    };

    view! {
        <form class=css::form on:submit=handle_submit>
            <input
                type="text"
                class=css::input
                placeholder="New folder name"
                autocomplete="off"
                prop:value=name
                on:input=handle_input
            />
            <button type="submit" class=css::button>
                <span class=css::buttonIcon><Icon icon=ic::FOLDER_PLUS /></span>
                "Create folder"
            </button>
            <FeedbackNote feedback=ctx.browser.create_feedback />
        </form>
    }
}
