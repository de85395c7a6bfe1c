use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::{FolderRepository, NewFolder};
use crate::error::{MarkError, Result};
use reelmark_model::Folder;

#[derive(Clone, Debug)]
pub struct PostgresFolderRepository {
    pool: PgPool,
}

impl PostgresFolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FolderRepository for PostgresFolderRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, user_id, name, description, sort_order, created_at, updated_at
            FROM folders
            WHERE user_id = $1
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(folders)
    }

    async fn get(&self, id: i64, user_id: Uuid) -> Result<Folder> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, user_id, name, description, sort_order, created_at, updated_at
            FROM folders
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| MarkError::NotFound(format!("folder {id} not found")))?;
        Ok(folder)
    }

    async fn create(&self, new: NewFolder) -> Result<Folder> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            INSERT INTO folders (user_id, name, description, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            RETURNING id, user_id, name, description, sort_order, created_at, updated_at
            "#,
        )
        .bind(new.user_id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.sort_order)
        .fetch_one(self.pool())
        .await?;
        Ok(folder)
    }

    async fn update(&self, folder: &Folder) -> Result<Folder> {
        let updated = sqlx::query_as::<_, Folder>(
            r#"
            UPDATE folders
            SET name = $3, description = $4, sort_order = $5, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, sort_order, created_at, updated_at
            "#,
        )
        .bind(folder.id)
        .bind(folder.user_id)
        .bind(&folder.name)
        .bind(&folder.description)
        .bind(folder.sort_order)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| MarkError::NotFound(format!("folder {} not found", folder.id)))?;
        Ok(updated)
    }

    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()> {
        // Cascade to child favorites in the same transaction.
        let mut tx = self.pool().begin().await?;

        sqlx::query("DELETE FROM favorites WHERE folder_id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM folders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(MarkError::NotFound(format!("folder {id} not found")));
        }

        tx.commit().await?;
        Ok(())
    }
}
