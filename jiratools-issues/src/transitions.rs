//! Transition Resolver
//!
//! Maps a caller-supplied status name onto one of the transitions the
//! workflow currently offers for an issue. Matching is case-insensitive
//! against the live transition set; a miss reports every available name so
//! the caller can retry without a second lookup.

use jiratools_api::models::RemoteTransition;
use jiratools_common::{JiraToolsError, Result};

/// Find the transition whose name matches `requested`, ignoring case.
///
/// The first match in workflow order wins. Returns
/// [`JiraToolsError::InvalidTransition`] carrying the full list of available
/// names when nothing matches.
pub fn resolve<'a>(
    requested: &str,
    available: &'a [RemoteTransition],
) -> Result<&'a RemoteTransition> {
    let wanted = requested.to_lowercase();
    available
        .iter()
        .find(|t| t.name.to_lowercase() == wanted)
        .ok_or_else(|| JiraToolsError::InvalidTransition {
            requested: requested.to_string(),
            available: available.iter().map(|t| t.name.clone()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transitions() -> Vec<RemoteTransition> {
        vec![
            RemoteTransition {
                id: "2".to_string(),
                name: "In Progress".to_string(),
            },
            RemoteTransition {
                id: "3".to_string(),
                name: "Done".to_string(),
            },
        ]
    }

    #[test]
    fn exact_name_resolves() {
        let set = transitions();
        let found = resolve("In Progress", &set).unwrap();
        assert_eq!(found.id, "2");
    }

    #[test]
    fn match_ignores_case() {
        let set = transitions();
        assert_eq!(resolve("done", &set).unwrap().id, "3");
        assert_eq!(resolve("IN PROGRESS", &set).unwrap().id, "2");
    }

    #[test]
    fn miss_enumerates_available_names() {
        let set = transitions();
        let err = resolve("Closed", &set).unwrap_err();
        match err {
            JiraToolsError::InvalidTransition {
                requested,
                available,
            } => {
                assert_eq!(requested, "Closed");
                assert_eq!(available, vec!["In Progress", "Done"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_set_is_a_miss() {
        let err = resolve("Done", &[]).unwrap_err();
        assert!(matches!(err, JiraToolsError::InvalidTransition { .. }));
    }

    #[test]
    fn first_match_wins_on_duplicate_names() {
        let set = vec![
            RemoteTransition {
                id: "5".to_string(),
                name: "Review".to_string(),
            },
            RemoteTransition {
                id: "9".to_string(),
                name: "review".to_string(),
            },
        ];
        assert_eq!(resolve("REVIEW", &set).unwrap().id, "5");
    }
}
