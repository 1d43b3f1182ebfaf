//! Hash-based routing for folder navigation.

/// Application routes for hash-based navigation.
/// URL format: `#/` for the root folder, `#/{folderId}` for any other folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Root folder listing: `#/` or empty hash.
    Root,
    /// Listing of one folder: `#/{folderId}`.
    Folder {
        /// Opaque folder identifier assigned by the backend. Not validated
        /// client-side; an unknown identifier simply fails to load.
        id: String,
    },
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let id = hash.trim_start_matches('#').trim_start_matches('/');

        if id.is_empty() {
            return Self::Root;
        }

        Self::Folder { id: id.to_string() }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Root => "#/".to_string(),
            Self::Folder { id } => format!("#/{}", id),
        }
    }

    /// The folder identifier this route addresses (`None` = root).
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Folder { id } => Some(id),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to match this route.
    ///
    /// Goes through `location.hash` rather than the history API: setting the
    /// hash fires `hashchange`, so programmatic navigation takes the same
    /// path through the router as back/forward and manual URL edits.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Root);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Root);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Root);
        assert_eq!(
            AppRoute::from_hash("#/42"),
            AppRoute::Folder {
                id: "42".to_string(),
            }
        );
        // Identifiers are opaque; UUID-shaped ones pass through untouched
        assert_eq!(
            AppRoute::from_hash("#/550e8400-e29b-41d4-a716-446655440000"),
            AppRoute::Folder {
                id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Root.to_hash(), "#/");
        assert_eq!(
            AppRoute::Folder {
                id: "99".to_string(),
            }
            .to_hash(),
            "#/99"
        );
    }

    #[test]
    fn test_route_round_trip() {
        for route in [
            AppRoute::Root,
            AppRoute::Folder {
                id: "42".to_string(),
            },
        ] {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_folder_id() {
        assert_eq!(AppRoute::Root.folder_id(), None);
        assert_eq!(
            AppRoute::Folder {
                id: "42".to_string(),
            }
            .folder_id(),
            Some("42")
        );
    }
}
