use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use test_utils::temp_storage_file;
use uuid::Uuid;

use super::SessionIdentity;
use super::SESSION_STORAGE_KEY;
use crate::domain::models::Storage;
use crate::infrastructure::storage::file::FileStorage;
use crate::infrastructure::storage::memory::MemoryStorage;

struct UnavailableStorage {}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>> {
        bail!("storage is disabled");
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("storage is disabled");
    }

    async fn remove_item(&self, _key: &str) -> Result<()> {
        bail!("storage is disabled");
    }

    async fn clear(&self) -> Result<()> {
        bail!("storage is disabled");
    }
}

struct ReadOnlyStorage {}

#[async_trait]
impl Storage for ReadOnlyStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>> {
        return Ok(None);
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("quota exceeded");
    }

    async fn remove_item(&self, _key: &str) -> Result<()> {
        return Ok(());
    }

    async fn clear(&self) -> Result<()> {
        return Ok(());
    }
}

#[test]
fn it_creates_uuid_v4_ids() -> Result<()> {
    let id = SessionIdentity::create_id();
    assert_eq!(Uuid::parse_str(&id)?.get_version_num(), 4);
    assert_ne!(id, SessionIdentity::create_id());

    return Ok(());
}

#[tokio::test]
async fn it_creates_and_stores_an_id() -> Result<()> {
    let storage = MemoryStorage::default();
    let session_id = SessionIdentity::get_or_create(&storage).await;

    assert!(Uuid::parse_str(&session_id).is_ok());
    assert_eq!(
        storage.get_item(SESSION_STORAGE_KEY).await?,
        Some(session_id)
    );

    return Ok(());
}

#[tokio::test]
async fn it_reuses_a_stored_id() -> Result<()> {
    let storage = MemoryStorage::default();
    storage
        .set_item(SESSION_STORAGE_KEY, "existing-visitor")
        .await?;

    assert_eq!(
        SessionIdentity::get_or_create(&storage).await,
        "existing-visitor"
    );

    return Ok(());
}

#[tokio::test]
async fn it_replaces_a_blank_stored_id() -> Result<()> {
    let storage = MemoryStorage::default();
    storage.set_item(SESSION_STORAGE_KEY, "").await?;

    let session_id = SessionIdentity::get_or_create(&storage).await;
    assert!(!session_id.is_empty());
    assert_eq!(
        storage.get_item(SESSION_STORAGE_KEY).await?,
        Some(session_id)
    );

    return Ok(());
}

#[tokio::test]
async fn it_is_stable_across_initializations() -> Result<()> {
    let (_dir, file_path) = temp_storage_file();

    let first = SessionIdentity::get_or_create(&FileStorage::new(file_path.clone())).await;
    let second = SessionIdentity::get_or_create(&FileStorage::new(file_path)).await;

    assert_eq!(first, second);

    return Ok(());
}

#[tokio::test]
async fn it_is_stable_after_recovering_a_malformed_file() -> Result<()> {
    let (_dir, file_path) = temp_storage_file();
    std::fs::create_dir_all(file_path.parent().unwrap())?;
    std::fs::write(&file_path, "chatSessionId: [not, a, string\n")?;

    let first = SessionIdentity::get_or_create(&FileStorage::new(file_path.clone())).await;
    let second = SessionIdentity::get_or_create(&FileStorage::new(file_path.clone())).await;
    assert_eq!(first, second);

    let storage = FileStorage::new(file_path);
    SessionIdentity::clear(&storage).await?;
    assert_ne!(SessionIdentity::get_or_create(&storage).await, first);

    return Ok(());
}

#[tokio::test]
async fn it_changes_after_storage_is_cleared() -> Result<()> {
    let (_dir, file_path) = temp_storage_file();
    let storage = FileStorage::new(file_path);

    let first = SessionIdentity::get_or_create(&storage).await;
    storage.clear().await?;
    let second = SessionIdentity::get_or_create(&storage).await;

    assert_ne!(first, second);

    return Ok(());
}

#[tokio::test]
async fn it_changes_after_the_session_is_cleared() -> Result<()> {
    let storage = MemoryStorage::default();

    let first = SessionIdentity::get_or_create(&storage).await;
    SessionIdentity::clear(&storage).await?;
    let second = SessionIdentity::get_or_create(&storage).await;

    assert_ne!(first, second);

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_to_ephemeral_ids_when_storage_fails() {
    let storage = UnavailableStorage {};

    let first = SessionIdentity::get_or_create(&storage).await;
    let second = SessionIdentity::get_or_create(&storage).await;

    assert!(Uuid::parse_str(&first).is_ok());
    assert_ne!(first, second);
}

#[tokio::test]
async fn it_returns_an_id_when_storing_fails() {
    let session_id = SessionIdentity::get_or_create(&ReadOnlyStorage {}).await;
    assert!(Uuid::parse_str(&session_id).is_ok());
}
