#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;

use async_trait::async_trait;
use chrono::SecondsFormat;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Reply shown when the webhook answers without a usable `output` field.
pub const MISSING_OUTPUT_REPLY: &str = "I apologize, I couldn't process that request.";

/// Reply shown when the webhook can't be reached or answers with a failure status.
pub const EXCHANGE_ERROR_REPLY: &str = "Sorry, there was an error processing your message.";

pub const DIRECT_REFERRER: &str = "direct";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("webhook could not be reached: {0}")]
    Transport(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Metadata describing where a message was sent from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user_agent: String,
    pub referrer: String,
    pub page: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub message: String,
    pub session_id: String,
    pub timestamp: String,
    pub user_agent: String,
    pub referrer: String,
    pub page: String,
}

impl WebhookRequest {
    pub fn new(message: &str, session_id: &str, context: &RequestContext) -> WebhookRequest {
        let mut referrer = context.referrer.trim().to_string();
        if referrer.is_empty() {
            referrer = DIRECT_REFERRER.to_string();
        }

        return WebhookRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: context.user_agent.to_string(),
            referrer,
            page: context.page.to_string(),
        };
    }
}

/// Extracts the reply text from a webhook response body. Anything other than
/// a JSON object with a non-empty string `output` yields `None`.
pub fn parse_output(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let output = value.get("output")?.as_str()?;
    if output.is_empty() {
        return None;
    }

    return Some(output.to_string());
}

#[async_trait]
pub trait Webhook {
    /// Posts a single chat message and returns the reply text, or `None` when
    /// the response carried no usable `output`.
    ///
    /// Implementations issue exactly one request and never retry.
    async fn send(&self, request: &WebhookRequest) -> Result<Option<String>, ExchangeError>;
}

pub type WebhookBox = Box<dyn Webhook + Send + Sync>;
