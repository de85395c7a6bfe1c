//! Owner-scoped repository ports.
//!
//! Every operation that touches a single record is scoped by
//! `(id, user_id)`; a miss on either half surfaces as `NotFound`. No
//! implicit global state: implementations own their connection handle.

pub mod favorites;
pub mod folders;
pub mod marks;
pub mod storage;

pub use favorites::{FavoriteRepository, NewFavorite};
pub use folders::{FolderRepository, NewFolder};
pub use marks::{MarkRepository, NewMark};
pub use storage::StorageDirectory;

#[cfg(test)]
pub use favorites::MockFavoriteRepository;
#[cfg(test)]
pub use folders::MockFolderRepository;
#[cfg(test)]
pub use marks::MockMarkRepository;
#[cfg(test)]
pub use storage::MockStorageDirectory;
