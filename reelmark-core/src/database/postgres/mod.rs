//! Postgres implementations of the repository ports.
//!
//! Queries use the runtime `query_as` API rather than compile-time checked
//! macros so the crate builds without a reachable database.

pub mod favorites;
pub mod folders;
pub mod marks;
pub mod storage;

pub use favorites::PostgresFavoriteRepository;
pub use folders::PostgresFolderRepository;
pub use marks::PostgresMarkRepository;
pub use storage::PostgresStorageDirectory;
