//! Localizer Port
//!
//! Localized field labels and message templates. The host owns the
//! translation catalogue; `DefaultLocale` ships the English strings so the
//! engine works without one.

/// Localized labels and templates
pub trait Localizer: Send + Sync {
    /// Label for a field key ("status", "assigned_to", "parent_issue", ...)
    fn field_label(&self, key: &str) -> String;

    /// Label for attachment changes
    fn attachment_label(&self) -> String;

    /// Caption for an issue update applied by a changeset; `link` is a
    /// ready-made markdown link to the revision view
    fn status_changed_by_changeset(&self, link: &str) -> String;
}

/// Built-in English labels
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocale;

impl Localizer for DefaultLocale {
    fn field_label(&self, key: &str) -> String {
        match key {
            "project" => "Project",
            "tracker" => "Tracker",
            "subject" => "Subject",
            "status" => "Status",
            "priority" => "Priority",
            "category" => "Category",
            "assigned_to" => "Assignee",
            "fixed_version" => "Target version",
            "parent_issue" => "Parent issue",
            "start_date" => "Start date",
            "due_date" => "Due date",
            "done_ratio" => "% Done",
            "estimated_hours" => "Estimated time",
            "is_private" => "Private",
            "watcher" => "Watchers",
            other => return humanize(other),
        }
        .to_string()
    }

    fn attachment_label(&self) -> String {
        "Attachment".to_string()
    }

    fn status_changed_by_changeset(&self, link: &str) -> String {
        format!("Applied in changeset {link}.")
    }
}

/// "some_field_key" -> "Some field key"
fn humanize(key: &str) -> String {
    let mut out = key.replace('_', " ");
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        let locale = DefaultLocale;
        assert_eq!(locale.field_label("assigned_to"), "Assignee");
        assert_eq!(locale.field_label("fixed_version"), "Target version");
        assert_eq!(locale.field_label("parent_issue"), "Parent issue");
        assert_eq!(locale.attachment_label(), "Attachment");
    }

    #[test]
    fn test_unknown_keys_are_humanized() {
        let locale = DefaultLocale;
        assert_eq!(locale.field_label("remaining_hours"), "Remaining hours");
    }

    #[test]
    fn test_changeset_caption() {
        let locale = DefaultLocale;
        assert_eq!(
            locale.status_changed_by_changeset("[r42](https://example.test/rev/42)"),
            "Applied in changeset [r42](https://example.test/rev/42)."
        );
    }
}
