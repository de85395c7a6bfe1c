use std::{fmt, sync::Arc};

use sqlx::PgPool;

use crate::infra::config::Config;
use reelmark_core::application::{AggregationService, FavoriteService, MarkService};
use reelmark_core::database::{
    PostgresFavoriteRepository, PostgresFolderRepository, PostgresMarkRepository,
    PostgresStorageDirectory, StorageDirectory,
};

#[derive(Clone)]
pub struct AppState {
    pub marks: MarkService,
    pub favorites: FavoriteService,
    pub aggregation: AggregationService,
    pub storage: Arc<dyn StorageDirectory>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(pool: PgPool, config: Arc<Config>) -> Self {
        let mark_repo = Arc::new(PostgresMarkRepository::new(pool.clone()));
        let folder_repo = Arc::new(PostgresFolderRepository::new(pool.clone()));
        let favorite_repo = Arc::new(PostgresFavoriteRepository::new(pool.clone()));
        let storage: Arc<dyn StorageDirectory> =
            Arc::new(PostgresStorageDirectory::new(pool));

        Self {
            marks: MarkService::new(mark_repo.clone()),
            favorites: FavoriteService::new(
                folder_repo.clone(),
                favorite_repo.clone(),
                storage.clone(),
            ),
            aggregation: AggregationService::new(
                mark_repo,
                favorite_repo,
                folder_repo,
                storage.clone(),
            ),
            storage,
            config,
        }
    }
}
