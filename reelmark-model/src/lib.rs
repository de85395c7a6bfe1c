//! Core data model definitions shared across Reelmark crates.
#![allow(missing_docs)]

pub mod favorite;
pub mod folder;
pub mod kind;
pub mod mark;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use favorite::Favorite;
pub use folder::Folder;
pub use kind::MediaKind;
pub use mark::{Mark, MarkDisplay};
pub use user::User;
