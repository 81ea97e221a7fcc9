#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::domain::models::parse_output;
use crate::domain::models::ExchangeError;
use crate::domain::models::Webhook;
use crate::domain::models::WebhookRequest;

/// An automation webhook (n8n or similar) reached with a single JSON POST.
pub struct HttpWebhook {
    url: String,
    client: reqwest::Client,
}

impl HttpWebhook {
    pub fn new(url: &str, timeout: Duration) -> Result<HttpWebhook> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        return Ok(HttpWebhook {
            url: url.to_string(),
            client,
        });
    }
}

#[async_trait]
impl Webhook for HttpWebhook {
    #[allow(clippy::implicit_return)]
    async fn send(&self, request: &WebhookRequest) -> Result<Option<String>, ExchangeError> {
        tracing::debug!(
            session_id = %request.session_id,
            page = %request.page,
            referrer = %request.referrer,
            "posting message to webhook"
        );

        let res = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Webhook is not reachable");
                return ExchangeError::Transport(err.to_string());
            })?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Webhook request failed");
            return Err(ExchangeError::Status(status.as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|err| return ExchangeError::Transport(err.to_string()))?;

        let output = parse_output(&body);
        if output.is_none() {
            tracing::warn!(body = %body, "Webhook response has no output field");
        }

        return Ok(output);
    }
}
