//! Backend file API operations.
//!
//! URL construction plus the operations the browser performs against the
//! backend: fetching a folder listing, creating a folder, and uploading
//! files. Download links are plain hrefs, so only their URL lives here.

use web_sys::{File, FormData};

use crate::api::http;
use crate::config;
use crate::core::ApiError;
use crate::models::{CreateFolderRequest, CreatedFolder, ListingPayload};

// =============================================================================
// URL Construction
// =============================================================================

/// URL of the listing endpoint for `folder` (`None` = root).
fn files_url(folder: Option<&str>) -> String {
    match folder {
        Some(id) => format!("{}/{}", config::API_FILES_BASE, id),
        None => config::API_FILES_BASE.to_string(),
    }
}

/// URL of the upload endpoint for `folder` (`None` = root).
fn upload_url(folder: Option<&str>) -> String {
    match folder {
        Some(id) => format!("{}/{}", config::UPLOAD_BASE, id),
        None => config::UPLOAD_BASE.to_string(),
    }
}

/// URL a file entry can be downloaded from.
pub fn download_url(file_id: &str) -> String {
    format!("{}/{}", config::DOWNLOAD_BASE, file_id)
}

// =============================================================================
// Operations
// =============================================================================

/// Fetch the raw listing payload for `folder` (`None` = root).
pub async fn fetch_listing(folder: Option<&str>) -> Result<ListingPayload, ApiError> {
    http::get_json(&files_url(folder)).await
}

/// Create a folder named `name` under `parent` and return its id.
pub async fn create_folder(parent: Option<&str>, name: &str) -> Result<CreatedFolder, ApiError> {
    http::post_json(&files_url(parent), &CreateFolderRequest { name }).await
}

/// Upload `files` into `folder` (`None` = root) as one multipart request,
/// one part per file under the same field name.
pub async fn upload_files(folder: Option<&str>, files: &[File]) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::RequestCreationFailed)?;
    for file in files {
        form.append_with_blob(config::UPLOAD_FIELD, file)
            .map_err(|_| ApiError::RequestCreationFailed)?;
    }
    http::post_form(&upload_url(folder), &form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_addresses_root_and_folders() {
        assert_eq!(files_url(None), "/api/files");
        assert_eq!(files_url(Some("42")), "/api/files/42");
    }

    #[test]
    fn upload_url_addresses_root_and_folders() {
        assert_eq!(upload_url(None), "/files/upload");
        assert_eq!(upload_url(Some("42")), "/files/upload/42");
    }

    #[test]
    fn download_url_addresses_the_file() {
        assert_eq!(download_url("8"), "/files/download/8");
    }
}
