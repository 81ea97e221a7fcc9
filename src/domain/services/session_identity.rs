#[cfg(test)]
#[path = "session_identity_test.rs"]
mod tests;

use uuid::Uuid;

use crate::domain::models::Storage;

/// Local storage key the visitor's session identifier is kept under.
pub const SESSION_STORAGE_KEY: &str = "chatSessionId";

pub struct SessionIdentity {}

impl SessionIdentity {
    pub fn create_id() -> String {
        return Uuid::new_v4().to_string();
    }

    /// Returns the stored session identifier, creating and storing one when
    /// none exists. Storage failures never propagate: the visitor gets an
    /// identifier that only lasts for this run instead.
    pub async fn get_or_create(storage: &(dyn Storage + Send + Sync)) -> String {
        match storage.get_item(SESSION_STORAGE_KEY).await {
            Ok(Some(session_id)) if !session_id.trim().is_empty() => {
                return session_id;
            }
            Ok(_) => {}
            Err(err) => {
                let session_id = SessionIdentity::create_id();
                tracing::warn!(error = ?err, session_id = %session_id, "Storage unavailable, using an ephemeral session");
                return session_id;
            }
        }

        let session_id = SessionIdentity::create_id();
        if let Err(err) = storage.set_item(SESSION_STORAGE_KEY, &session_id).await {
            tracing::warn!(error = ?err, session_id = %session_id, "Failed to persist session, using an ephemeral session");
        }

        return session_id;
    }

    pub async fn clear(storage: &(dyn Storage + Send + Sync)) -> anyhow::Result<()> {
        return storage.remove_item(SESSION_STORAGE_KEY).await;
    }
}
