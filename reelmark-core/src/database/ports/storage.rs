use async_trait::async_trait;

use crate::error::Result;

/// Directory of storage backends, used to repair legacy mark paths and to
/// auto-detect the backend a favorite's path belongs to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageDirectory: Send + Sync {
    /// Mount path of a backend, or None for an unknown id.
    async fn mount_path(&self, storage_id: i64) -> Result<Option<String>>;

    /// Resolve a path to `(storage_id, mount_path)` by longest mount-path
    /// prefix, or None when no backend claims it.
    async fn resolve(&self, path: &str) -> Result<Option<(i64, String)>>;
}
