//! Issue Entity
//!
//! A tracked object snapshot. Carries the display strings the host resolves
//! from its associations (tracker, status, priority, assignee) so that
//! formatting a creation event needs no further lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::Project;

/// An issue snapshot from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub subject: String,
    /// Tracker display name ("Bug", "Feature", ...)
    pub tracker: String,
    /// Author display name
    pub author: String,
    /// Status display name
    pub status: String,
    /// Priority display name
    pub priority: String,
    /// Assignee display name, if assigned
    pub assigned_to: Option<String>,
    pub description: Option<String>,
    /// Private issues are never announced
    pub is_private: bool,
    /// Watcher display names
    #[serde(default)]
    pub watchers: Vec<String>,
    /// Owning project
    pub project: Project,
    pub updated_on: DateTime<Utc>,
}

impl Issue {
    /// Create a new issue snapshot
    pub fn new(id: u64, project: Project, tracker: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            tracker: tracker.into(),
            author: String::new(),
            status: String::new(),
            priority: String::new(),
            assigned_to: None,
            description: None,
            is_private: false,
            watchers: Vec::new(),
            project,
            updated_on: Utc::now(),
        }
    }

    /// Set the author display name
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the status display name
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the priority display name
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Set the assignee display name
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the issue private
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Set the watcher display names
    pub fn with_watchers(mut self, watchers: Vec<String>) -> Self {
        self.watchers = watchers;
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.tracker, self.id, self.subject)
    }
}

/// A file attached to a tracked object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub filename: String,
}

impl Attachment {
    pub fn new(id: u64, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_reference() {
        let issue = Issue::new(42, Project::new(1, "Sandbox"), "Bug", "Crash on open");
        assert_eq!(issue.to_string(), "Bug #42: Crash on open");
    }
}
