//! Application router component.
//!
//! Handles URL-based routing with hash history so deep links survive a
//! static deployment. Uses native hashchange events instead of leptos_router
//! for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the displayed folder is derived
//!   from `#/{folderId}`
//! - **hashchange events**: browser back/forward buttons work automatically,
//!   and programmatic navigation goes through the same code path
//! - **Route changes drive loads**: an effect begins a fresh session cycle
//!   whenever the addressed folder changes

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browser::FileBrowser;
use crate::models::AppRoute;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Root folder listing
/// - `#/{folderId}` → Listing of that folder
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // The memo dedupes hash noise: re-setting an equal route is not a change,
    // so navigating to the folder already on screen does not start a load.
    let route_memo = Memo::new(move |_| route.get());

    // Each distinct route begins a fresh load cycle for its folder.
    Effect::new(move |_| {
        let folder = route_memo.get().folder_id().map(str::to_string);
        ctx.browser.load(folder);
    });

    view! {
        <FileBrowser />
    }
}
