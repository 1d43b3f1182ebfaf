//! Core browsing logic, kept free of reactive and DOM types.
//!
//! This module provides:
//! - [`FolderSession`] - the load/success/failure state machine for the displayed folder
//! - [`breadcrumb_trail`] - breadcrumb derivation from a listing path
//! - [`ApiError`] - errors produced at the backend boundary

mod breadcrumbs;
pub mod error;
mod session;

pub use breadcrumbs::{breadcrumb_trail, Crumb};
pub use error::ApiError;
pub use session::{FolderSession, LoadTicket, SessionStatus};
