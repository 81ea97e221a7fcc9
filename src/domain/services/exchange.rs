#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::time;

use super::SessionIdentity;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::ExchangeError;
use crate::domain::models::Message;
use crate::domain::models::RequestContext;
use crate::domain::models::WebhookBox;
use crate::domain::models::WebhookRequest;
use crate::domain::models::EXCHANGE_ERROR_REPLY;
use crate::domain::models::MISSING_OUTPUT_REPLY;
use crate::infrastructure::storage::StorageManager;
use crate::infrastructure::webhooks::WebhookManager;

/// Sends visitor messages to the webhook on behalf of one session.
pub struct ExchangeService {
    webhook: WebhookBox,
    session_id: String,
    context: RequestContext,
    reply_delay: Duration,
}

impl ExchangeService {
    pub fn new(
        webhook: WebhookBox,
        session_id: &str,
        context: RequestContext,
        reply_delay: Duration,
    ) -> ExchangeService {
        return ExchangeService {
            webhook,
            session_id: session_id.to_string(),
            context,
            reply_delay,
        };
    }

    pub async fn from_config() -> Result<ExchangeService> {
        let webhook = WebhookManager::get()?;
        let storage = StorageManager::get(&Config::get(ConfigKey::StorageFile));
        let session_id = SessionIdentity::get_or_create(storage.as_ref()).await;

        let context = RequestContext {
            user_agent: Config::get(ConfigKey::UserAgent),
            referrer: Config::get(ConfigKey::Referrer),
            page: Config::get(ConfigKey::Page),
        };
        let reply_delay = Duration::from_millis(Config::get_u64(ConfigKey::ReplyDelay)?);

        return Ok(ExchangeService::new(
            webhook,
            &session_id,
            context,
            reply_delay,
        ));
    }

    pub fn session_id(&self) -> &str {
        return &self.session_id;
    }

    /// Posts one message and returns the reply text. A response without a
    /// usable `output` is not an error and yields the apology reply instead.
    pub async fn send(&self, message: &str) -> Result<String, ExchangeError> {
        let request = WebhookRequest::new(message, &self.session_id, &self.context);
        let output = self.webhook.send(&request).await?;

        return Ok(output.unwrap_or_else(|| return MISSING_OUTPUT_REPLY.to_string()));
    }

    /// Runs a full turn and always produces a reply for the conversation.
    /// Failures are logged and surface as the error apology, never as raw
    /// error text.
    pub async fn exchange(&self, message: &str) -> Message {
        match self.send(message).await {
            Ok(reply) => {
                time::sleep(self.reply_delay).await;
                return Message::new(Author::Assistant, &reply);
            }
            Err(err) => {
                tracing::error!(error = %err, session_id = %self.session_id, "Webhook exchange failed");
                return Message::new(Author::Assistant, EXCHANGE_ERROR_REPLY);
            }
        }
    }
}
