//! Main file browser component.
//!
//! Renders whatever state the folder session is in: a loading notice, a
//! full-page load error, or the listing with its controls. Navigation stays
//! available in every state, so a dead folder never strands the user.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::breadcrumbs::Breadcrumbs;
use super::create_folder::CreateFolderForm;
use super::upload::UploadZone;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::SessionStatus;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view driven by the folder session.
#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::browser>
            {move || {
                // Clone the status out so no signal borrow is held while the
                // subtree renders.
                let status = ctx.browser.session.with(|session| session.status().clone());
                match status {
                    SessionStatus::Loading => view! { <LoadingView /> }.into_any(),
                    SessionStatus::Failed(error) => {
                        view! { <LoadErrorView message=error.to_string() /> }.into_any()
                    }
                    SessionStatus::Loaded(_) => view! { <ListingView /> }.into_any(),
                }
            }}
        </div>
    }
}

/// Listing plus its controls; rendered only once a load succeeded.
#[component]
fn ListingView() -> impl IntoView {
    view! {
        <Breadcrumbs />
        <CreateFolderForm />
        <UploadZone />
    }
}

/// Placeholder shown while a load cycle is in flight.
#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class=css::loading>
            <span>"Loading ..."</span>
        </div>
    }
}

/// Full-page load failure.
///
/// The listing is gone for this folder, but both actions below and the
/// browser's own back button still work.
#[component]
fn LoadErrorView(message: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::error>
            <span class=css::errorIcon><Icon icon=ic::ALERT /></span>
            <p class=css::errorTitle>"Could not load this folder"</p>
            <p class=css::errorDetail>{message}</p>
            <div class=css::errorActions>
                <button class=css::errorButton on:click=move |_| ctx.browser.reload()>
                    "Try again"
                </button>
                <button class=css::errorButton on:click=|_| AppRoute::Root.push()>
                    "Go to root"
                </button>
            </div>
        </div>
    }
}
