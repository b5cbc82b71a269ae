//! Domain Errors
//!
//! Error types for the notification engine. Notifications are best-effort:
//! these errors are logged and swallowed at the integration boundary, never
//! surfaced to the host's event pipeline.

use thiserror::Error;

/// Notification engine errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
