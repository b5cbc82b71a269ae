//! Teams Integration Settings
//!
//! An injected, read-only snapshot of the host's plugin options. The host
//! stores options as strings; `from_map` understands that encoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration snapshot for the Teams integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsSettings {
    /// Global default webhook URL
    pub teams_url: Option<String>,
    /// Whether issue edits are announced
    pub post_updates: bool,
    /// Whether wiki edits are announced
    pub post_wiki_updates: bool,
    /// Whether issue-created cards list the watchers
    pub display_watchers: bool,
}

impl TeamsSettings {
    /// Create settings with everything off
    pub fn new() -> Self {
        Self {
            teams_url: None,
            post_updates: false,
            post_wiki_updates: false,
            display_watchers: false,
        }
    }

    /// Set the global default webhook URL
    pub fn with_teams_url(mut self, url: impl Into<String>) -> Self {
        self.teams_url = Some(url.into());
        self
    }

    /// Enable issue edit notifications
    pub fn with_post_updates(mut self, enable: bool) -> Self {
        self.post_updates = enable;
        self
    }

    /// Enable wiki edit notifications
    pub fn with_post_wiki_updates(mut self, enable: bool) -> Self {
        self.post_wiki_updates = enable;
        self
    }

    /// List watchers on issue-created cards
    pub fn with_display_watchers(mut self, enable: bool) -> Self {
        self.display_watchers = enable;
        self
    }

    /// Build a snapshot from the host's raw string options.
    ///
    /// Recognized keys: `teams_url`, `post_updates` ("1" enables),
    /// `post_wiki_updates` ("1" enables), `display_watchers` ("yes"
    /// enables). Unknown keys are ignored.
    pub fn from_map(options: &HashMap<String, String>) -> Self {
        Self {
            teams_url: options
                .get("teams_url")
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            post_updates: options.get("post_updates").is_some_and(|v| v == "1"),
            post_wiki_updates: options.get("post_wiki_updates").is_some_and(|v| v == "1"),
            display_watchers: options.get("display_watchers").is_some_and(|v| v == "yes"),
        }
    }
}

impl Default for TeamsSettings {
    fn default() -> Self {
        Self::new()
    }
}
