use std::path::PathBuf;

use tempfile::TempDir;

/// A storage file location inside a fresh temporary directory. The directory
/// is removed when the returned guard is dropped.
pub fn temp_storage_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("nested/storage.yaml");

    return (dir, file_path);
}

pub fn webhook_reply_body(output: &str) -> String {
    return serde_json::json!({ "output": output }).to_string();
}

pub fn stylist_reply_fixture() -> &'static str {
    return "For a timeless evening look, pair the Silk Blouse with our Tailored Pants and finish with the Classic Coat. Would you like sizing help?";
}
