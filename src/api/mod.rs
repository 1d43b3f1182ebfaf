//! Backend API client.
//!
//! Provides:
//! - [`fetch_listing`] - Folder listing retrieval
//! - [`create_folder`] - Folder creation under a parent
//! - [`upload_files`] - Multipart file upload
//! - [`download_url`] - Download link construction

mod files;
mod http;

pub use files::{create_folder, download_url, fetch_listing, upload_files};
