use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::{FavoriteRepository, NewFavorite};
use crate::error::{MarkError, Result};
use reelmark_model::Favorite;

const FAVORITE_COLUMNS: &str =
    "id, user_id, folder_id, storage_id, original_path, file_name, note, fingerprint, created_at";

#[derive(Clone, Debug)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn list_for_folder(&self, folder_id: i64, user_id: Uuid) -> Result<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites \
             WHERE folder_id = $1 AND user_id = $2 \
             ORDER BY created_at DESC"
        ))
        .bind(folder_id)
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(favorites)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(favorites)
    }

    async fn exists(&self, user_id: Uuid, folder_id: i64, original_path: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM favorites \
             WHERE user_id = $1 AND folder_id = $2 AND original_path = $3",
        )
        .bind(user_id)
        .bind(folder_id)
        .bind(original_path)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }

    async fn create(&self, new: NewFavorite) -> Result<Favorite> {
        let favorite = sqlx::query_as::<_, Favorite>(&format!(
            "INSERT INTO favorites \
             (user_id, folder_id, storage_id, original_path, file_name, note, fingerprint, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, now()) \
             RETURNING {FAVORITE_COLUMNS}"
        ))
        .bind(new.user_id)
        .bind(new.folder_id)
        .bind(new.storage_id)
        .bind(&new.original_path)
        .bind(&new.file_name)
        .bind(&new.note)
        .bind(&new.fingerprint)
        .fetch_one(self.pool())
        .await?;
        Ok(favorite)
    }

    async fn update_note(&self, id: i64, user_id: Uuid, note: &str) -> Result<Favorite> {
        let favorite = sqlx::query_as::<_, Favorite>(&format!(
            "UPDATE favorites SET note = $3 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {FAVORITE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .bind(note)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| MarkError::NotFound(format!("favorite {id} not found")))?;
        Ok(favorite)
    }

    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool())
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(MarkError::NotFound(format!("favorite {id} not found")));
        }
        Ok(())
    }
}
