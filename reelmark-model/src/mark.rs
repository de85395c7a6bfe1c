use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's time-coded annotation attached to a media file.
///
/// Marks are linked to media only through fingerprint equality; there is no
/// foreign key to a favorite or folder. `original_path` records the path as
/// of creation and may predate mount-path normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Mark {
    pub id: i64,
    pub user_id: Uuid,
    pub fingerprint: String,
    pub storage_id: i64,
    pub original_path: String,
    pub time_second: f64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display-safe projection of a [`Mark`].
///
/// Omits the owner id and fingerprint so API responses never expose
/// internal linkage fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDisplay {
    pub id: i64,
    pub time_second: f64,
    pub title: String,
    pub content: String,
}

impl Mark {
    pub fn to_display(&self) -> MarkDisplay {
        MarkDisplay {
            id: self.id,
            time_second: self.time_second,
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}
