#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ExchangeService;
use crate::domain::models::Action;
use crate::domain::models::Event;

pub struct ActionsService {}

impl ActionsService {
    /// Handles actions until the UI drops its sender. Each exchange is awaited
    /// before the next action is received, so requests are never interleaved.
    /// There is no abort: an exchange started before the widget closed still
    /// delivers its reply.
    pub async fn start(
        exchange: ExchangeService,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::WebhookRequest(text) => {
                    let reply = exchange.exchange(&text).await;
                    tracing::debug!(replied_at = %reply.timestamp, "Reply ready");
                    if tx.send(Event::WebhookReply(reply)).is_err() {
                        tracing::debug!("UI closed before the reply arrived");
                        return Ok(());
                    }
                }
            }
        }

        return Ok(());
    }
}
