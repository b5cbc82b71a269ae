//! Wiki Page Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A wiki page snapshot from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiPage {
    pub title: String,
    /// Author display name of the current content version
    pub author: String,
    /// Edit comment of the current content version (may be empty)
    #[serde(default)]
    pub comments: String,
    pub updated_on: DateTime<Utc>,
}

impl WikiPage {
    /// Create a new wiki page snapshot
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            comments: String::new(),
            updated_on: Utc::now(),
        }
    }

    /// Set the edit comment
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }
}
