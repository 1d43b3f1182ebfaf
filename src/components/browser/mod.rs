//! File browser UI components.
//!
//! The browsing surface for the folder tree backed by the session state.
//!
//! Components:
//! - [`FileBrowser`] - Session-driven view (loading, error, or listing)
//! - `Breadcrumbs` - Clickable path bar
//! - `FileList` - Folders and files of the loaded listing
//! - `CreateFolderForm` - Folder creation control
//! - `UploadZone` - File picker and drop target around the list

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod browser;
mod create_folder;
mod feedback_note;
mod file_list;
mod upload;

pub use browser::FileBrowser;
