//! Wire contracts for the folder hierarchy service and the partitioned
//! listing derived from them.
//!
//! The backend mixes subfolders and leaf files in one `files` array and
//! discriminates them with a `folder` flag; [`Listing::partition`] splits
//! that array without reordering, dropping, or duplicating entries. Payload
//! shapes are explicit: a response that parses as JSON but does not match
//! these types is treated as a failed load, never passed through.

use serde::{Deserialize, Serialize};

// =============================================================================
// Listing Payloads
// =============================================================================

/// One child entry of a folder, either a subfolder or a leaf file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FolderEntry {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Display name.
    pub name: String,
    /// True for subfolders, false for leaf files.
    pub folder: bool,
}

/// One ancestor folder on the path from the root, root-first.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PathSegment {
    /// Opaque identifier of the ancestor.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Raw body of a listing response.
///
/// Both collections are required; unknown fields (the backend also sends
/// `parentId` per entry) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListingPayload {
    /// Children of the requested folder, subfolders and files mixed.
    pub files: Vec<FolderEntry>,
    /// Ancestors of the requested folder, root-first. Empty at the root.
    pub path: Vec<PathSegment>,
}

/// Children of one folder, partitioned for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Subfolder entries, in backend order.
    pub folders: Vec<FolderEntry>,
    /// Leaf file entries, in backend order.
    pub files: Vec<FolderEntry>,
    /// Ancestors of this folder, root-first.
    pub path: Vec<PathSegment>,
}

impl Listing {
    /// Splits a payload's entry list by the `folder` flag.
    ///
    /// Every entry lands in exactly one bucket and relative order within
    /// each bucket is the backend's.
    pub fn partition(payload: ListingPayload) -> Self {
        let (folders, files): (Vec<_>, Vec<_>) =
            payload.files.into_iter().partition(|entry| entry.folder);
        Self {
            folders,
            files,
            path: payload.path,
        }
    }
}

// =============================================================================
// Mutation Payloads
// =============================================================================

/// Body of a folder-creation request.
#[derive(Debug, Serialize)]
pub struct CreateFolderRequest<'a> {
    /// Trimmed, non-empty folder name. All other rules are the backend's.
    pub name: &'a str,
}

/// Interpreted part of a folder-creation response.
///
/// The backend echoes the full created entry; only the identifier matters
/// to the client, everything else is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedFolder {
    /// Identifier of the new folder, used as the navigation target.
    pub id: String,
}
