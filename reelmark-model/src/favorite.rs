use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookmark placing a media file into a folder.
///
/// Identified by both fingerprint (for reconciliation with marks) and path
/// (for duplicate checks at creation). Deleting the parent folder cascades
/// to its favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: Uuid,
    pub folder_id: i64,
    pub storage_id: i64,
    pub original_path: String,
    pub file_name: String,
    pub note: String,
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}
