//! Notification Sink Port
//!
//! Outbound delivery interface. Delivery is best-effort and at-most-once:
//! implementations swallow transport failures after logging them, so the
//! signature has no error channel for the caller to observe.

use async_trait::async_trait;

/// Outbound payload delivery
///
/// # Example
///
/// ```rust,ignore
/// use trackcast::ports::NotificationSink;
///
/// struct HttpSink { /* reqwest client */ }
///
/// #[async_trait]
/// impl NotificationSink for HttpSink {
///     async fn dispatch(&self, url: &str, payload: serde_json::Value) {
///         // Spawn a detached POST; log and swallow failures
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver a payload to a webhook URL, fire-and-forget
    async fn dispatch(&self, url: &str, payload: serde_json::Value);
}
