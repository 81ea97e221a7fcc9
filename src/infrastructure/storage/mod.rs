#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod file;
pub mod memory;

use std::path;

use crate::domain::models::StorageBox;

pub struct StorageManager {}

impl StorageManager {
    /// File backed storage at `file_path`. Falls back to in-process storage
    /// when no path is configured or the path can never hold a file.
    pub fn get(file_path: &str) -> StorageBox {
        if file_path.trim().is_empty() {
            return Box::<memory::MemoryStorage>::default();
        }

        let file_path = path::PathBuf::from(file_path);
        if file_path.is_dir() {
            tracing::warn!(path = ?file_path, "Storage path is a directory, keeping items in memory");
            return Box::<memory::MemoryStorage>::default();
        }

        return Box::new(file::FileStorage::new(file_path));
    }
}
