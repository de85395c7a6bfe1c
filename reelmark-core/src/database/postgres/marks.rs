use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::{MarkRepository, NewMark};
use crate::error::{MarkError, Result};
use reelmark_model::Mark;

const MARK_COLUMNS: &str = "id, user_id, fingerprint, storage_id, original_path, \
                            time_second, title, content, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PostgresMarkRepository {
    pool: PgPool,
}

impl PostgresMarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MarkRepository for PostgresMarkRepository {
    async fn list_for_fingerprint(&self, user_id: Uuid, fingerprint: &str) -> Result<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(&format!(
            "SELECT {MARK_COLUMNS} FROM marks \
             WHERE user_id = $1 AND fingerprint = $2 \
             ORDER BY time_second ASC"
        ))
        .bind(user_id)
        .bind(fingerprint)
        .fetch_all(self.pool())
        .await?;
        Ok(marks)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(&format!(
            "SELECT {MARK_COLUMNS} FROM marks \
             WHERE user_id = $1 \
             ORDER BY time_second ASC"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(marks)
    }

    async fn get(&self, id: i64, user_id: Uuid) -> Result<Mark> {
        let mark = sqlx::query_as::<_, Mark>(&format!(
            "SELECT {MARK_COLUMNS} FROM marks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| MarkError::NotFound(format!("mark {id} not found")))?;
        Ok(mark)
    }

    async fn create(&self, new: NewMark) -> Result<Mark> {
        let mark = sqlx::query_as::<_, Mark>(&format!(
            "INSERT INTO marks \
             (user_id, fingerprint, storage_id, original_path, time_second, title, content, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, now(), now()) \
             RETURNING {MARK_COLUMNS}"
        ))
        .bind(new.user_id)
        .bind(&new.fingerprint)
        .bind(new.storage_id)
        .bind(&new.original_path)
        .bind(new.time_second)
        .bind(&new.title)
        .bind(&new.content)
        .fetch_one(self.pool())
        .await?;
        Ok(mark)
    }

    async fn update(&self, mark: &Mark) -> Result<Mark> {
        let updated = sqlx::query_as::<_, Mark>(&format!(
            "UPDATE marks \
             SET time_second = $3, title = $4, content = $5, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {MARK_COLUMNS}"
        ))
        .bind(mark.id)
        .bind(mark.user_id)
        .bind(mark.time_second)
        .bind(&mark.title)
        .bind(&mark.content)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| MarkError::NotFound(format!("mark {} not found", mark.id)))?;
        Ok(updated)
    }

    async fn delete(&self, id: i64, user_id: Uuid) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM marks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool())
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(MarkError::NotFound(format!("mark {id} not found")));
        }
        Ok(())
    }
}
