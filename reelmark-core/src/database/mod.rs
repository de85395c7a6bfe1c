//! Persistence layer: repository ports and their Postgres implementations.

pub mod ports;
pub mod postgres;

pub use ports::{
    FavoriteRepository, FolderRepository, MarkRepository, NewFavorite, NewFolder, NewMark,
    StorageDirectory,
};
pub use postgres::{
    PostgresFavoriteRepository, PostgresFolderRepository, PostgresMarkRepository,
    PostgresStorageDirectory,
};
