//! Upload zone wrapping the file list.
//!
//! Files arrive through a hidden picker or by dropping them anywhere on the
//! listing. Either path hands the same `Vec<File>` to the browser state, so
//! the request and its feedback are identical for both.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::feedback_note::FeedbackNote;
use super::file_list::FileList;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/upload.module.css");

/// Collects a `web_sys::FileList` into a plain vector.
fn collect_files(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

#[component]
pub fn UploadZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (drag_over, set_drag_over) = signal(false);

    let handle_pick = move |_: ev::Event| {
        let Some(input) = input_ref.get() else { return };
        let Some(list) = input.files() else { return };
        ctx.browser.upload_files(collect_files(&list));
        // Reset so picking the same file again still fires a change event
        input.set_value("");
    };

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let handle_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let handle_drag_leave = move |_: ev::DragEvent| {
        set_drag_over.set(false);
    };

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let Some(transfer) = ev.data_transfer() else { return };
        let Some(list) = transfer.files() else { return };
        ctx.browser.upload_files(collect_files(&list));
    };

    let zone_class = move || {
        if drag_over.get() {
            format!("{} {}", css::zone, css::zoneDragOver)
        } else {
            css::zone.to_string()
        }
    };

    view! {
        <section
            class=zone_class
            on:dragover=handle_drag_over
            on:dragleave=handle_drag_leave
            on:drop=handle_drop
        >
            <div class=css::uploadBar>
                <input
                    node_ref=input_ref
                    type="file"
                    multiple=true
                    class=css::fileInput
                    on:change=handle_pick
                />
                <button class=css::uploadButton on:click=open_picker>
                    <span class=css::buttonIcon><Icon icon=ic::UPLOAD /></span>
                    "Upload files"
                </button>
                <span class=css::hint>"or drop files onto the list"</span>
                <FeedbackNote feedback=ctx.browser.upload_feedback />
            </div>
            <FileList />
        </section>
    }
}
