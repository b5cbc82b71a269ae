//! Destination Resolution
//!
//! Determines the webhook URL a project's notifications go to. Projects
//! override per subtree through a custom field; anything unset inherits
//! from the parent chain and finally the global default. No URL means no
//! send.

use trackcast::domain::entities::Project;
use trackcast::ports::ReferenceDirectory;

use crate::config::TeamsSettings;

/// Name of the project custom field holding the per-project webhook URL
pub const URL_CUSTOM_FIELD: &str = "Teams URL";

/// Upper bound on parent-chain hops; a cyclic hierarchy degrades to the
/// global default instead of hanging
const MAX_PARENT_HOPS: usize = 64;

/// Resolve the webhook URL for a project.
///
/// Precedence, first non-blank wins: the project's own "Teams URL" custom
/// field, the nearest ancestor's, then the global default from settings.
pub fn resolve_url(
    project: &Project,
    directory: &dyn ReferenceDirectory,
    settings: &TeamsSettings,
) -> Option<String> {
    let mut current = project.clone();
    for _ in 0..MAX_PARENT_HOPS {
        if let Some(url) = present(current.custom_value(URL_CUSTOM_FIELD)) {
            return Some(url);
        }
        match current.parent_id.and_then(|id| directory.project(id)) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    present(settings.teams_url.as_deref())
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MemoryDirectory;

    fn settings_with_default() -> TeamsSettings {
        TeamsSettings::new().with_teams_url("https://example.test/default")
    }

    #[test]
    fn test_own_custom_field_wins() {
        let parent = Project::new(1, "Parent").with_custom_value(URL_CUSTOM_FIELD, "https://example.test/parent");
        let child = Project::new(2, "Child")
            .with_parent(1)
            .with_custom_value(URL_CUSTOM_FIELD, "https://example.test/child");
        let directory = MemoryDirectory::new().with_project(parent);

        assert_eq!(
            resolve_url(&child, &directory, &settings_with_default()),
            Some("https://example.test/child".to_string())
        );
    }

    #[test]
    fn test_inherits_from_parent() {
        let parent = Project::new(1, "Parent").with_custom_value(URL_CUSTOM_FIELD, "https://example.test/parent");
        let child = Project::new(2, "Child").with_parent(1);
        let directory = MemoryDirectory::new().with_project(parent);

        assert_eq!(
            resolve_url(&child, &directory, &settings_with_default()),
            Some("https://example.test/parent".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_global_default() {
        let child = Project::new(2, "Child").with_parent(1);
        // Parent is not resolvable; only the global default remains
        let directory = MemoryDirectory::new();

        assert_eq!(
            resolve_url(&child, &directory, &settings_with_default()),
            Some("https://example.test/default".to_string())
        );
    }

    #[test]
    fn test_nothing_configured_resolves_absent() {
        let project = Project::new(1, "Lone");
        let directory = MemoryDirectory::new();

        assert_eq!(resolve_url(&project, &directory, &TeamsSettings::new()), None);
    }

    #[test]
    fn test_blank_custom_field_is_skipped() {
        let project = Project::new(1, "Blank").with_custom_value(URL_CUSTOM_FIELD, "  ");
        let directory = MemoryDirectory::new();

        assert_eq!(
            resolve_url(&project, &directory, &settings_with_default()),
            Some("https://example.test/default".to_string())
        );
    }

    #[test]
    fn test_cyclic_hierarchy_degrades_to_default() {
        let a = Project::new(1, "A").with_parent(2);
        let b = Project::new(2, "B").with_parent(1);
        let directory = MemoryDirectory::new().with_project(a.clone()).with_project(b);

        assert_eq!(
            resolve_url(&a, &directory, &settings_with_default()),
            Some("https://example.test/default".to_string())
        );
    }
}
