use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use reelmark_model::Mark;

/// Fields required to create a mark; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMark {
    pub user_id: Uuid,
    pub fingerprint: String,
    pub storage_id: i64,
    pub original_path: String,
    pub time_second: f64,
    pub title: String,
    pub content: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarkRepository: Send + Sync {
    /// One file's marks for one user, ordered `time_second ASC`.
    async fn list_for_fingerprint(&self, user_id: Uuid, fingerprint: &str) -> Result<Vec<Mark>>;

    /// All of a user's marks, ordered `time_second ASC`. Aggregation
    /// relies on this ordering to keep groups time-ascending.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Mark>>;

    async fn get(&self, id: i64, user_id: Uuid) -> Result<Mark>;

    async fn create(&self, new: NewMark) -> Result<Mark>;

    async fn update(&self, mark: &Mark) -> Result<Mark>;

    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()>;
}
