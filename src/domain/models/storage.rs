use anyhow::Result;
use async_trait::async_trait;

/// Key/value storage local to this machine, the terminal equivalent of a
/// browser's local storage.
#[async_trait]
pub trait Storage {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Removes every stored item.
    async fn clear(&self) -> Result<()>;
}

pub type StorageBox = Box<dyn Storage + Send + Sync>;
