use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use reelmark_model::Folder;

/// Fields required to create a folder; the store assigns id and
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFolder {
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub sort_order: i32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// All folders of one user, ordered `sort_order ASC, created_at DESC`.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Folder>>;

    /// NotFound when the folder is absent or owned by someone else.
    async fn get(&self, id: i64, user_id: Uuid) -> Result<Folder>;

    async fn create(&self, new: NewFolder) -> Result<Folder>;

    async fn update(&self, folder: &Folder) -> Result<Folder>;

    /// Deletes the folder's favorites first, then the folder itself.
    /// NotFound when the folder is absent or owned by someone else.
    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()>;
}
