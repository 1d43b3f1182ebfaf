//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuDownload as Download, LuFile as File,
        LuFolder as Folder, LuFolderPlus as FolderPlus, LuHouse as Home,
        LuTriangleAlert as Alert, LuUpload as Upload,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsDownload as Download,
        BsExclamationTriangleFill as Alert, BsFileEarmark as File, BsFolderFill as Folder,
        BsFolderPlus as FolderPlus, BsHouseFill as Home, BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_PLUS, FolderPlus);
themed_icon!(FILE, File);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DOWNLOAD, Download);
themed_icon!(UPLOAD, Upload);
themed_icon!(ALERT, Alert);
