//! Application services: permission gating, ownership checks, and the
//! orchestration between repositories and the pure reconciliation engine.

pub mod aggregation;
pub mod favorites;
pub mod marks;

pub use aggregation::AggregationService;
pub use favorites::{
    CreateFavorite, CreateFolder, FavoriteService, UpdateFavorite, UpdateFolder,
};
pub use marks::{CreateMark, MarkService, UpdateMark};

use crate::error::{MarkError, Result};
use reelmark_model::User;

/// Writes require a logged-in, enabled account.
pub(crate) fn ensure_writable(user: &User) -> Result<()> {
    if !user.can_write() {
        return Err(MarkError::PermissionDenied(
            "only logged-in users can modify marks and favorites".to_string(),
        ));
    }
    Ok(())
}

/// Favorites and folders are protected reads: guests are denied rather
/// than handed an empty list.
pub(crate) fn ensure_member(user: &User) -> Result<()> {
    if user.is_guest() {
        return Err(MarkError::PermissionDenied(
            "guest users cannot access favorites".to_string(),
        ));
    }
    Ok(())
}
