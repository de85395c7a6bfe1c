use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::application::{ensure_member, ensure_writable};
use crate::database::ports::{
    FavoriteRepository, FolderRepository, NewFavorite, NewFolder, StorageDirectory,
};
use crate::error::{MarkError, Result};
use crate::reconcile::file_name_of;
use reelmark_model::{Favorite, Folder, User};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolder {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFolder {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorite {
    pub folder_id: i64,
    /// 0 means "detect from the path via the storage directory".
    #[serde(default)]
    pub storage_id: i64,
    pub original_path: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub fingerprint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFavorite {
    pub id: i64,
    #[serde(default)]
    pub note: String,
}

/// Folder and favorite CRUD with ownership and duplicate checks.
#[derive(Clone)]
pub struct FavoriteService {
    folders: Arc<dyn FolderRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    storage: Arc<dyn StorageDirectory>,
}

impl std::fmt::Debug for FavoriteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoriteService").finish_non_exhaustive()
    }
}

impl FavoriteService {
    pub fn new(
        folders: Arc<dyn FolderRepository>,
        favorites: Arc<dyn FavoriteRepository>,
        storage: Arc<dyn StorageDirectory>,
    ) -> Self {
        Self {
            folders,
            favorites,
            storage,
        }
    }

    pub async fn list_folders(&self, user: &User) -> Result<Vec<Folder>> {
        ensure_member(user)?;
        self.folders.list_for_user(user.id).await
    }

    pub async fn get_folder(&self, user: &User, id: i64) -> Result<Folder> {
        ensure_member(user)?;
        self.folders.get(id, user.id).await
    }

    pub async fn create_folder(&self, user: &User, args: CreateFolder) -> Result<Folder> {
        ensure_writable(user)?;
        if args.name.is_empty() {
            return Err(MarkError::Validation("folder name is required".to_string()));
        }
        self.folders
            .create(NewFolder {
                user_id: user.id,
                name: args.name,
                description: args.description,
                sort_order: args.sort_order,
            })
            .await
    }

    /// An empty `name` keeps the current one; description and sort order
    /// are always overwritten.
    pub async fn update_folder(&self, user: &User, args: UpdateFolder) -> Result<Folder> {
        ensure_writable(user)?;
        let mut folder = self.folders.get(args.id, user.id).await?;
        if !args.name.is_empty() {
            folder.name = args.name;
        }
        folder.description = args.description;
        folder.sort_order = args.sort_order;
        self.folders.update(&folder).await
    }

    /// Deleting a folder cascades to its favorites.
    pub async fn delete_folder(&self, user: &User, id: i64) -> Result<()> {
        ensure_writable(user)?;
        self.folders.delete(id, user.id).await
    }

    /// Favorites in one folder, or all of the user's favorites when
    /// `folder_id` is 0.
    pub async fn list_favorites(&self, user: &User, folder_id: i64) -> Result<Vec<Favorite>> {
        ensure_member(user)?;
        if folder_id == 0 {
            self.favorites.list_for_user(user.id).await
        } else {
            self.favorites.list_for_folder(folder_id, user.id).await
        }
    }

    pub async fn create_favorite(&self, user: &User, args: CreateFavorite) -> Result<Favorite> {
        ensure_writable(user)?;
        if args.original_path.is_empty() {
            return Err(MarkError::Validation(
                "original_path is required".to_string(),
            ));
        }

        self.folders
            .get(args.folder_id, user.id)
            .await
            .map_err(|_| {
                MarkError::NotFound("folder not found or not owned by user".to_string())
            })?;

        // Duplicate check keys on path, not fingerprint; a rename can
        // legitimately produce two favorites for the same content.
        if self
            .favorites
            .exists(user.id, args.folder_id, &args.original_path)
            .await?
        {
            return Err(MarkError::Conflict(
                "file already exists in this folder".to_string(),
            ));
        }

        let mut storage_id = args.storage_id;
        if storage_id == 0 {
            match self.storage.resolve(&args.original_path).await {
                Ok(Some((id, _))) => storage_id = id,
                Ok(None) => {}
                Err(err) => {
                    warn!(%err, path = %args.original_path, "storage detection failed");
                }
            }
        }

        let file_name = if args.file_name.is_empty() {
            file_name_of(&args.original_path).to_string()
        } else {
            args.file_name
        };

        self.favorites
            .create(NewFavorite {
                user_id: user.id,
                folder_id: args.folder_id,
                storage_id,
                original_path: args.original_path,
                file_name,
                note: args.note,
                fingerprint: args.fingerprint,
            })
            .await
    }

    pub async fn update_favorite(&self, user: &User, args: UpdateFavorite) -> Result<Favorite> {
        ensure_writable(user)?;
        self.favorites
            .update_note(args.id, user.id, &args.note)
            .await
    }

    pub async fn delete_favorite(&self, user: &User, id: i64) -> Result<()> {
        ensure_writable(user)?;
        self.favorites.delete(id, user.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::{
        MockFavoriteRepository, MockFolderRepository, MockStorageDirectory,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn member() -> User {
        User {
            id: Uuid::from_u128(1),
            username: "alice".to_string(),
            guest: false,
            disabled: false,
        }
    }

    fn guest() -> User {
        User {
            id: Uuid::nil(),
            username: "guest".to_string(),
            guest: true,
            disabled: false,
        }
    }

    fn folder(id: i64, user_id: Uuid) -> Folder {
        Folder {
            id,
            user_id,
            name: "watchlist".to_string(),
            description: String::new(),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn favorite_from(new: NewFavorite) -> Favorite {
        Favorite {
            id: 1,
            user_id: new.user_id,
            folder_id: new.folder_id,
            storage_id: new.storage_id,
            original_path: new.original_path,
            file_name: new.file_name,
            note: new.note,
            fingerprint: new.fingerprint,
            created_at: Utc::now(),
        }
    }

    fn service(
        folders: MockFolderRepository,
        favorites: MockFavoriteRepository,
        storage: MockStorageDirectory,
    ) -> FavoriteService {
        FavoriteService::new(Arc::new(folders), Arc::new(favorites), Arc::new(storage))
    }

    fn create_args() -> CreateFavorite {
        CreateFavorite {
            folder_id: 4,
            storage_id: 0,
            original_path: "/drive/movie.mp4".to_string(),
            file_name: String::new(),
            note: String::new(),
            fingerprint: "f1".to_string(),
        }
    }

    #[tokio::test]
    async fn guest_folder_listing_is_denied() {
        let svc = service(
            MockFolderRepository::new(),
            MockFavoriteRepository::new(),
            MockStorageDirectory::new(),
        );
        let err = svc.list_folders(&guest()).await.unwrap_err();
        assert!(matches!(err, MarkError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn duplicate_favorite_conflicts() {
        let user = member();
        let mut folders = MockFolderRepository::new();
        folders
            .expect_get()
            .returning(|id, uid| Ok(folder(id, uid)));
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_exists().returning(|_, _, _| Ok(true));
        favorites.expect_create().never();

        let svc = service(folders, favorites, MockStorageDirectory::new());
        let err = svc.create_favorite(&user, create_args()).await.unwrap_err();
        assert!(matches!(err, MarkError::Conflict(_)));
    }

    #[tokio::test]
    async fn missing_folder_is_not_found() {
        let mut folders = MockFolderRepository::new();
        folders
            .expect_get()
            .returning(|id, _| Err(MarkError::NotFound(format!("folder {id} not found"))));
        let svc = service(
            folders,
            MockFavoriteRepository::new(),
            MockStorageDirectory::new(),
        );
        let err = svc
            .create_favorite(&member(), create_args())
            .await
            .unwrap_err();
        assert!(matches!(err, MarkError::NotFound(_)));
    }

    #[tokio::test]
    async fn storage_id_detected_from_path_when_omitted() {
        let mut folders = MockFolderRepository::new();
        folders
            .expect_get()
            .returning(|id, uid| Ok(folder(id, uid)));
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_exists().returning(|_, _, _| Ok(false));
        favorites
            .expect_create()
            .withf(|new| new.storage_id == 3 && new.file_name == "movie.mp4")
            .returning(|new| Ok(favorite_from(new)));
        let mut storage = MockStorageDirectory::new();
        storage
            .expect_resolve()
            .returning(|_| Ok(Some((3, "/drive".to_string()))));

        let svc = service(folders, favorites, storage);
        let created = svc.create_favorite(&member(), create_args()).await.unwrap();
        assert_eq!(created.storage_id, 3);
    }

    #[tokio::test]
    async fn storage_detection_failure_degrades_to_zero() {
        let mut folders = MockFolderRepository::new();
        folders
            .expect_get()
            .returning(|id, uid| Ok(folder(id, uid)));
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_exists().returning(|_, _, _| Ok(false));
        favorites
            .expect_create()
            .withf(|new| new.storage_id == 0)
            .returning(|new| Ok(favorite_from(new)));
        let mut storage = MockStorageDirectory::new();
        storage
            .expect_resolve()
            .returning(|_| Err(MarkError::Internal("directory offline".to_string())));

        let svc = service(folders, favorites, storage);
        let created = svc.create_favorite(&member(), create_args()).await.unwrap();
        assert_eq!(created.storage_id, 0);
    }

    #[tokio::test]
    async fn folder_update_keeps_name_when_empty() {
        let mut folders = MockFolderRepository::new();
        folders
            .expect_get()
            .returning(|id, uid| Ok(folder(id, uid)));
        folders
            .expect_update()
            .withf(|f| f.name == "watchlist" && f.description == "new desc" && f.sort_order == 7)
            .returning(|f| Ok(f.clone()));

        let svc = service(
            folders,
            MockFavoriteRepository::new(),
            MockStorageDirectory::new(),
        );
        let updated = svc
            .update_folder(
                &member(),
                UpdateFolder {
                    id: 4,
                    name: String::new(),
                    description: "new desc".to_string(),
                    sort_order: 7,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "watchlist");
    }
}
