//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`browser`] - Folder listing, path bar, and mutation controls
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
pub mod router;

pub use router::AppRouter;
