use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::ports::StorageDirectory;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresStorageDirectory {
    pool: PgPool,
}

impl PostgresStorageDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StorageDirectory for PostgresStorageDirectory {
    async fn mount_path(&self, storage_id: i64) -> Result<Option<String>> {
        let mount: Option<String> =
            sqlx::query_scalar("SELECT mount_path FROM storage_backends WHERE id = $1")
                .bind(storage_id)
                .fetch_optional(self.pool())
                .await?;
        Ok(mount)
    }

    async fn resolve(&self, path: &str) -> Result<Option<(i64, String)>> {
        // Longest mount-path prefix wins; "/" matches everything.
        let backends: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, mount_path FROM storage_backends")
                .fetch_all(self.pool())
                .await?;

        let mut best: Option<(i64, String)> = None;
        for (id, mount) in backends {
            let claims = mount == "/"
                || path == mount
                || path.starts_with(&format!("{mount}/"));
            if claims {
                let better = best
                    .as_ref()
                    .map(|(_, current)| mount.len() > current.len())
                    .unwrap_or(true);
                if better {
                    best = Some((id, mount));
                }
            }
        }
        Ok(best)
    }
}
