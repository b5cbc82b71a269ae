//! Microsoft Teams Integration for Trackcast
//!
//! Formats tracker events into Teams chat messages and delivers them to an
//! incoming-webhook endpoint. Supports both the legacy MessageCard payload
//! (connector URLs containing "webhook") and the Adaptive Card payload
//! (workflow URLs).
//!
//! # Usage
//!
//! ```rust,ignore
//! use trackcast_integration_teams::{TeamsClient, TeamsNotifier, TeamsSettings};
//!
//! let settings = TeamsSettings::new().with_teams_url("https://example.test/hook");
//! let sink = Arc::new(TeamsClient::new()?);
//! let notifier = TeamsNotifier::new(settings, directory, router, locale, sink);
//! notifier.issue_created(&issue).await;
//! ```

mod cards;
mod client;
mod config;
mod destination;
mod fields;
mod markup;
mod notifier;

#[cfg(test)]
mod testkit;

pub use cards::{build_payload, CardFormat};
pub use client::TeamsClient;
pub use config::TeamsSettings;
pub use destination::{resolve_url, URL_CUSTOM_FIELD};
pub use fields::extract_fields;
pub use markup::{escape, split_blocks};
pub use notifier::TeamsNotifier;
