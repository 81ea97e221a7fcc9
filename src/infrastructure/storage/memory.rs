#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::models::Storage;

/// Storage that only lives as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
    items: DashMap<String, String>,
}

#[async_trait]
impl Storage for MemoryStorage {
    #[allow(clippy::implicit_return)]
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        return Ok(self.items.get(key).map(|val| return val.to_string()));
    }

    #[allow(clippy::implicit_return)]
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.remove(key);
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn clear(&self) -> Result<()> {
        self.items.clear();
        return Ok(());
    }
}
