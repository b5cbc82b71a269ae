//! Changeset Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository changeset snapshot from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changeset {
    /// Revision identifier (commit hash or sequence number)
    pub revision: String,
    /// Commit message
    pub comments: String,
    /// Repository identifier within the project
    pub repository: String,
    pub committed_on: DateTime<Utc>,
}

impl Changeset {
    /// Create a new changeset snapshot
    pub fn new(revision: impl Into<String>, comments: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            comments: comments.into(),
            repository: String::new(),
            committed_on: Utc::now(),
        }
    }

    /// Set the repository identifier
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }
}
