//! Outbound webhook notifier for workflow automation.
//!
//! Posts the full work-order snapshot as JSON to a configured automation
//! endpoint, which fans the payload out to confirmation and notification
//! emails. Schedule changes reuse the same endpoint with a distinct event
//! name.

use crate::work_order::{
    domain::WorkOrder,
    ports::{NotificationKind, WorkOrderNotifier, WorkOrderNotifierError},
};
use async_trait::async_trait;
use minijinja::Environment;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::time::Duration;

/// Default human-readable message rendered into each payload.
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Work order {{ code }} ({{ title }}) for {{ department }} is now {{ status }}.";

/// Header carrying the hex-encoded SHA-256 payload signature.
pub const SIGNATURE_HEADER: &str = "x-verger-signature";

/// Configuration for the HTTP notifier.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Automation endpoint receiving the POST.
    pub endpoint: String,
    /// Shared secret mixed into the payload signature.
    pub secret: String,
    /// Per-delivery timeout.
    pub timeout: Duration,
    /// Message template override; `None` uses
    /// [`DEFAULT_MESSAGE_TEMPLATE`].
    pub message_template: Option<String>,
}

/// `reqwest`-based notifier delivering signed JSON payloads.
#[derive(Debug, Clone)]
pub struct HttpWorkOrderNotifier {
    client: reqwest::Client,
    endpoint: String,
    secret: String,
    message_template: String,
}

impl HttpWorkOrderNotifier {
    /// Creates a notifier from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderNotifierError::Delivery`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: WebhookConfig) -> Result<Self, WorkOrderNotifierError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WorkOrderNotifierError::delivery)?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            secret: config.secret,
            message_template: config
                .message_template
                .unwrap_or_else(|| DEFAULT_MESSAGE_TEMPLATE.to_owned()),
        })
    }

    fn render_message(
        &self,
        kind: NotificationKind,
        work_order: &WorkOrder,
    ) -> Result<String, WorkOrderNotifierError> {
        let environment = Environment::new();
        let context = json!({
            "event": kind.as_str(),
            "code": work_order.code().to_string(),
            "title": work_order.details().title(),
            "status": work_order.status().as_str(),
            "priority": work_order.priority().as_str(),
            "requestor": work_order.requestor().name(),
            "department": work_order.requestor().department().as_str(),
            "requested_date": work_order.requested_date().to_string(),
        });
        environment
            .render_str(&self.message_template, context)
            .map_err(|error| WorkOrderNotifierError::Payload(error.to_string()))
    }
}

#[async_trait]
impl WorkOrderNotifier for HttpWorkOrderNotifier {
    async fn notify(
        &self,
        kind: NotificationKind,
        work_order: &WorkOrder,
    ) -> Result<(), WorkOrderNotifierError> {
        let message = self.render_message(kind, work_order)?;
        let payload = json!({
            "event": kind.as_str(),
            "message": message,
            "work_order": work_order,
        });
        let body =
            serde_json::to_vec(&payload).map_err(|error| WorkOrderNotifierError::Payload(error.to_string()))?;
        let signature = sign_payload(&self.secret, &body);

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await
            .map_err(WorkOrderNotifierError::delivery)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorkOrderNotifierError::EndpointStatus {
                status: status.as_u16(),
            });
        }
        tracing::debug!(endpoint = %self.endpoint, event = %kind, "webhook delivered");
        Ok(())
    }
}

/// Computes the hex-encoded SHA-256 digest of the secret followed by the
/// payload bytes.
#[must_use]
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(body);
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sign_payload;

    #[test]
    fn sign_payload_is_deterministic() {
        let first = sign_payload("secret", b"payload");
        let second = sign_payload("secret", b"payload");
        assert_eq!(first, second);
    }

    #[test]
    fn sign_payload_produces_lowercase_hex_digest() {
        let signature = sign_payload("secret", b"payload");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sign_payload_differs_by_secret() {
        assert_ne!(
            sign_payload("secret-a", b"payload"),
            sign_payload("secret-b", b"payload")
        );
    }

    #[test]
    fn sign_payload_differs_by_body() {
        assert_ne!(
            sign_payload("secret", b"payload-a"),
            sign_payload("secret", b"payload-b")
        );
    }
}
