//! HTTP Dispatch
//!
//! Delivers card payloads to the webhook endpoint using reqwest. Delivery
//! is fire-and-forget: the POST runs on a detached task, the response is
//! never inspected, and transport failures are logged and swallowed. The
//! calling event pipeline must never block on, or fail because of, a
//! notification.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use trackcast::domain::errors::NotifyError;
use trackcast::ports::NotificationSink;

/// Teams webhook client
pub struct TeamsClient {
    client: Client,
}

impl TeamsClient {
    /// Build a client with the default timeout and user agent.
    ///
    /// TLS verification uses the platform trust store.
    pub fn new() -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("trackcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl NotificationSink for TeamsClient {
    async fn dispatch(&self, url: &str, payload: serde_json::Value) {
        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to serialize notification payload");
                return;
            }
        };

        debug!(url = %url, bytes = body.len(), "dispatching notification");

        let client = self.client.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let result = client
                .post(&url)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await;
            if let Err(e) = result {
                warn!(url = %url, error = %e, "cannot connect to webhook");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unreachable_destination_does_not_raise() {
        let client = TeamsClient::new().unwrap();
        // Reserved TEST-NET-1 address; the connection will fail
        client
            .dispatch("http://192.0.2.1:9/hook", json!({"title": "T"}))
            .await;
        // Give the detached task a moment to run into the failure
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
