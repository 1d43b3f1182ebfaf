//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::AppRouter;
use crate::config::RELOAD_LISTING_AFTER_UPLOAD;
use crate::core::FolderSession;
use crate::models::{AppRoute, Feedback};

// ============================================================================
// BrowserState
// ============================================================================

/// Browser state managed with Leptos signals.
///
/// Owns the folder session and the feedback slots for the two mutating
/// controls. All async work funnels through the methods here so that every
/// state write goes through the session's staleness check.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Load lifecycle of the folder addressed by the current route.
    pub session: RwSignal<FolderSession>,
    /// Outcome of the last folder creation attempt, shown by its form.
    pub create_feedback: RwSignal<Option<Feedback>>,
    /// Outcome of the last upload attempt, shown by the upload zone.
    pub upload_feedback: RwSignal<Option<Feedback>>,
}

impl BrowserState {
    /// Creates a new browser state awaiting the first load of the root
    /// folder.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(FolderSession::new()),
            create_feedback: RwSignal::new(None),
            upload_feedback: RwSignal::new(None),
        }
    }

    /// Starts a load cycle for `folder` (`None` = root) and settles the
    /// session with its outcome.
    ///
    /// Navigating again while the fetch is in flight supersedes the cycle;
    /// the late response is then dropped before any signal write, so it can
    /// neither overwrite newer state nor re-render anything.
    pub fn load(&self, folder: Option<String>) {
        self.create_feedback.set(None);
        self.upload_feedback.set(None);

        let session = self.session;
        let Some(ticket) = session.try_update(|current| current.begin(folder.clone())) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_listing(folder.as_deref()).await;

            // The staleness check runs untracked and before `update`, so a
            // superseded response causes no subscriber notification at all.
            if !session.with_untracked(|current| current.is_current(&ticket)) {
                return;
            }
            session.update(|current| {
                current.settle(&ticket, result);
            });
        });
    }

    /// Reloads the folder the session is currently bound to.
    pub fn reload(&self) {
        let folder = self
            .session
            .with_untracked(|current| current.folder().map(str::to_string));
        self.load(folder);
    }

    /// Creates a folder under the current one and navigates into it.
    ///
    /// Only emptiness is checked locally; every other name is the backend's
    /// call. On success the route change triggers a fresh load of the new
    /// folder. On failure the current listing stays untouched and the error
    /// surfaces next to the create form.
    pub fn create_folder(&self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            self.create_feedback
                .set(Some(Feedback::error("Name cannot be empty")));
            return;
        }

        let state = *self;
        let parent = self
            .session
            .with_untracked(|current| current.folder().map(str::to_string));

        spawn_local(async move {
            match api::create_folder(parent.as_deref(), &name).await {
                Ok(created) => {
                    state.create_feedback.set(None);
                    AppRoute::Folder { id: created.id }.push();
                }
                Err(error) => {
                    state.create_feedback.set(Some(Feedback::error(format!(
                        "Could not create folder: {}",
                        error
                    ))));
                }
            }
        });
    }

    /// Uploads `files` into the current folder as one multipart request.
    ///
    /// The listing is not refreshed afterwards unless
    /// [`RELOAD_LISTING_AFTER_UPLOAD`] says so; a failure leaves the session
    /// untouched and surfaces next to the upload zone.
    pub fn upload_files(&self, files: Vec<web_sys::File>) {
        if files.is_empty() {
            return;
        }

        let state = *self;
        let folder = self
            .session
            .with_untracked(|current| current.folder().map(str::to_string));

        spawn_local(async move {
            match api::upload_files(folder.as_deref(), &files).await {
                Ok(()) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::log_1(&format!("Uploaded {} file(s)", files.len()).into());
                    // Reload first: starting a load clears both feedback
                    // slots, and the success note should survive it.
                    if RELOAD_LISTING_AFTER_UPLOAD {
                        state.reload();
                    }
                    state.upload_feedback.set(Some(Feedback::success(format!(
                        "Uploaded {} file(s)",
                        files.len()
                    ))));
                }
                Err(error) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("Upload failed: {}", error).into());
                    state
                        .upload_feedback
                        .set(Some(Feedback::error(format!("Upload failed: {}", error))));
                }
            }
        });
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Folder browsing state (session, mutation feedback).
    pub browser: BrowserState,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the hash router
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f6f7f9;
                    color: #2b2f36;
                    font-family: sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6c7a89; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6c7a89;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #c0392b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
