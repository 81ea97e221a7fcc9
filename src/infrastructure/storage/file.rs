#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::Storage;

/// Storage persisted as a flat YAML map on disk.
pub struct FileStorage {
    pub file_path: path::PathBuf,
}

impl FileStorage {
    pub fn new(file_path: path::PathBuf) -> FileStorage {
        return FileStorage { file_path };
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        if payload.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        // An unreadable map is dropped so the next write replaces it.
        match serde_yaml::from_str::<BTreeMap<String, String>>(&payload) {
            Ok(items) => return Ok(items),
            Err(err) => {
                tracing::warn!(error = %err, path = ?self.file_path, "Storage file is malformed, starting from an empty map");
                return Ok(BTreeMap::new());
            }
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_yaml::to_string(items)?;
        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        return Ok(());
    }
}

#[async_trait]
impl Storage for FileStorage {
    #[allow(clippy::implicit_return)]
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.read_all().await?;
        return Ok(items.get(key).cloned());
    }

    #[allow(clippy::implicit_return)]
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await?;

        tracing::debug!(key = key, path = ?self.file_path, "stored item");
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn remove_item(&self, key: &str) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        let mut items = self.read_all().await?;
        if items.remove(key).is_some() {
            self.write_all(&items).await?;
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn clear(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path).await?;
        return Ok(());
    }
}
