use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::database::ports::{
    FavoriteRepository, FolderRepository, MarkRepository, StorageDirectory,
};
use crate::error::Result;
use crate::reconcile::{MediaWithMarks, aggregate_marks};
use reelmark_model::{MediaKind, User};

/// Pulls the snapshots the reconciliation engine needs and runs it.
///
/// The mark fetch is the only fatal failure; favorites, folder names, and
/// mount paths are best-effort and degrade to empty lookups.
#[derive(Clone)]
pub struct AggregationService {
    marks: Arc<dyn MarkRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    folders: Arc<dyn FolderRepository>,
    storage: Arc<dyn StorageDirectory>,
}

impl std::fmt::Debug for AggregationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationService").finish_non_exhaustive()
    }
}

impl AggregationService {
    pub fn new(
        marks: Arc<dyn MarkRepository>,
        favorites: Arc<dyn FavoriteRepository>,
        folders: Arc<dyn FolderRepository>,
        storage: Arc<dyn StorageDirectory>,
    ) -> Self {
        Self {
            marks,
            favorites,
            folders,
            storage,
        }
    }

    pub async fn aggregate(&self, user: &User, kind: MediaKind) -> Result<Vec<MediaWithMarks>> {
        if user.is_guest() {
            return Ok(Vec::new());
        }

        let marks = self.marks.list_for_user(user.id).await?;

        let favorites = match self.favorites.list_for_user(user.id).await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(%err, "favorite lookup failed; aggregating without favorites");
                Vec::new()
            }
        };

        let folder_names: HashMap<i64, String> = match self.folders.list_for_user(user.id).await {
            Ok(folders) => folders.into_iter().map(|f| (f.id, f.name)).collect(),
            Err(err) => {
                warn!(%err, "folder lookup failed; folder names will be empty");
                HashMap::new()
            }
        };

        let mut mount_paths: HashMap<i64, String> = HashMap::new();
        for mark in &marks {
            if mark.storage_id <= 0 || mount_paths.contains_key(&mark.storage_id) {
                continue;
            }
            match self.storage.mount_path(mark.storage_id).await {
                Ok(Some(mount)) => {
                    mount_paths.insert(mark.storage_id, mount);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(%err, storage_id = mark.storage_id, "mount path lookup failed");
                }
            }
        }

        Ok(aggregate_marks(
            kind,
            &marks,
            &favorites,
            &folder_names,
            &mount_paths,
        ))
    }
}
