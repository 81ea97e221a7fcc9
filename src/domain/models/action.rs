#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward a trimmed, non-empty visitor message to the webhook.
    WebhookRequest(String),
}
