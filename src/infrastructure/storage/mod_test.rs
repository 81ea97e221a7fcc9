use anyhow::Result;
use test_utils::temp_storage_file;

use super::StorageManager;

#[tokio::test]
async fn it_uses_the_storage_file() -> Result<()> {
    let (_dir, file_path) = temp_storage_file();
    let storage = StorageManager::get(&file_path.to_string_lossy());

    storage.set_item("chatSessionId", "abc").await?;

    assert!(file_path.exists());
    return Ok(());
}

#[tokio::test]
async fn it_keeps_items_in_memory_without_a_path() -> Result<()> {
    let storage = StorageManager::get("");

    storage.set_item("chatSessionId", "abc").await?;
    assert_eq!(
        storage.get_item("chatSessionId").await?,
        Some("abc".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_to_memory_when_the_path_is_a_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = StorageManager::get(&dir.path().to_string_lossy());

    storage.set_item("chatSessionId", "abc").await?;
    assert_eq!(
        storage.get_item("chatSessionId").await?,
        Some("abc".to_string())
    );

    return Ok(());
}
