//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Listing and folder-creation endpoint. The folder identifier is appended
/// as one extra path segment; without it the backend answers for the root.
pub const API_FILES_BASE: &str = "/api/files";

/// Multipart upload endpoint; addresses the target folder the same way.
pub const UPLOAD_BASE: &str = "/files/upload";

/// Download location for leaf files.
pub const DOWNLOAD_BASE: &str = "/files/download";

/// Multipart field name the backend expects every uploaded file under.
pub const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Behavior Configuration
// =============================================================================

/// Whether a successful upload triggers a refresh of the displayed listing.
/// When off, uploaded files appear on the next navigation into the folder.
pub const RELOAD_LISTING_AFTER_UPLOAD: bool = false;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
