//! Hook Events
//!
//! The four inbound events the notification engine reacts to. Events are
//! transient: constructed by the host's hook dispatch, consumed by one
//! notification cycle, never persisted.

use serde::{Deserialize, Serialize};

use super::changeset::Changeset;
use super::issue::Issue;
use super::journal::Journal;
use super::project::Project;
use super::wiki::WikiPage;

/// An event raised by the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HookEvent {
    /// A new issue was created
    IssueCreated { issue: Issue },

    /// An issue was edited through the UI
    IssueEdited { issue: Issue, journal: Journal },

    /// An issue was updated by a referencing commit
    CommitUpdate {
        issue: Issue,
        journal: Journal,
        changeset: Changeset,
        /// Whether the host persisted the update successfully
        saved: bool,
    },

    /// A wiki page was edited
    WikiEdited { project: Project, page: WikiPage },
}

impl HookEvent {
    /// The project the event belongs to
    pub fn project(&self) -> &Project {
        match self {
            Self::IssueCreated { issue }
            | Self::IssueEdited { issue, .. }
            | Self::CommitUpdate { issue, .. } => &issue.project,
            Self::WikiEdited { project, .. } => project,
        }
    }
}
