use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use reelmark_model::Favorite;

/// Fields required to create a favorite; the store assigns id and
/// created_at.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub folder_id: i64,
    pub storage_id: i64,
    pub original_path: String,
    pub file_name: String,
    pub note: String,
    pub fingerprint: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites in one folder, newest first.
    async fn list_for_folder(&self, folder_id: i64, user_id: Uuid) -> Result<Vec<Favorite>>;

    /// All of a user's favorites across folders, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>>;

    /// Duplicate check keyed on (user, folder, path), not on fingerprint;
    /// a rename can legitimately produce two favorites for one content.
    async fn exists(&self, user_id: Uuid, folder_id: i64, original_path: &str) -> Result<bool>;

    async fn create(&self, new: NewFavorite) -> Result<Favorite>;

    /// The note is the only mutable field of a favorite.
    async fn update_note(&self, id: i64, user_id: Uuid, note: &str) -> Result<Favorite>;

    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()>;
}
