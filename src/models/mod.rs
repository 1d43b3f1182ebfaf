//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FolderEntry`], [`PathSegment`], [`Listing`] - Folder listing payloads and their partition
//! - [`CreateFolderRequest`], [`CreatedFolder`] - Folder-creation wire contracts
//! - [`AppRoute`] - Hash-based navigation routes
//! - [`Feedback`] - Mutation outcome messages

mod feedback;
mod listing;
mod route;

pub use feedback::{Feedback, FeedbackKind};
pub use listing::{
    CreateFolderRequest, CreatedFolder, FolderEntry, Listing, ListingPayload, PathSegment,
};
pub use route::AppRoute;
