//! Breadcrumb trail derivation.
//!
//! Maps the `path` segments of a listing to the crumbs the path bar renders.
//! The backend reports the path from the root down to the current folder;
//! every prefix of it is a navigation target except the full path itself,
//! which names the folder already on screen.

use crate::models::{AppRoute, PathSegment};

/// One entry in the path bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display name of the segment.
    pub label: String,
    /// Route this crumb navigates to; `None` marks the current folder.
    pub target: Option<AppRoute>,
}

/// Derives the crumb trail for a listing's `path`.
///
/// The root crumb always comes first. At root the trail is that single
/// non-navigable crumb; anywhere deeper, every crumb except the last is a
/// link to its folder.
pub fn breadcrumb_trail(path: &[PathSegment]) -> Vec<Crumb> {
    let mut crumbs = Vec::with_capacity(path.len() + 1);
    crumbs.push(Crumb {
        label: "Root".to_string(),
        target: (!path.is_empty()).then_some(AppRoute::Root),
    });
    for (index, segment) in path.iter().enumerate() {
        let is_last = index + 1 == path.len();
        crumbs.push(Crumb {
            label: segment.name.clone(),
            target: (!is_last).then(|| AppRoute::Folder {
                id: segment.id.clone(),
            }),
        });
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, name: &str) -> PathSegment {
        PathSegment {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn root_listing_yields_a_single_inactive_crumb() {
        let crumbs = breadcrumb_trail(&[]);
        assert_eq!(
            crumbs,
            vec![Crumb {
                label: "Root".to_string(),
                target: None,
            }]
        );
    }

    #[test]
    fn nested_path_links_every_crumb_but_the_last() {
        let crumbs = breadcrumb_trail(&[
            segment("42", "Projects"),
            segment("77", "Reports"),
            segment("93", "2024"),
        ]);

        assert_eq!(crumbs.len(), 4);
        assert_eq!(crumbs[0].label, "Root");
        assert_eq!(crumbs[0].target, Some(AppRoute::Root));
        assert_eq!(crumbs[1].label, "Projects");
        assert_eq!(
            crumbs[1].target,
            Some(AppRoute::Folder {
                id: "42".to_string()
            })
        );
        assert_eq!(crumbs[2].label, "Reports");
        assert_eq!(
            crumbs[2].target,
            Some(AppRoute::Folder {
                id: "77".to_string()
            })
        );
        assert_eq!(crumbs[3].label, "2024");
        assert_eq!(crumbs[3].target, None);
    }

    #[test]
    fn single_segment_path_links_only_the_root() {
        let crumbs = breadcrumb_trail(&[segment("42", "Projects")]);

        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].target, Some(AppRoute::Root));
        assert_eq!(crumbs[1].label, "Projects");
        assert_eq!(crumbs[1].target, None);
    }

    #[test]
    fn exactly_one_crumb_is_inactive() {
        for depth in 0..5 {
            let path: Vec<PathSegment> = (0..depth)
                .map(|i| segment(&i.to_string(), &format!("level-{}", i)))
                .collect();
            let crumbs = breadcrumb_trail(&path);

            assert_eq!(crumbs.len(), depth + 1);
            let inactive = crumbs.iter().filter(|crumb| crumb.target.is_none()).count();
            assert_eq!(inactive, 1);
            assert!(crumbs.last().unwrap().target.is_none());
        }
    }
}
