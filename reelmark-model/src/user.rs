use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal caller identity as resolved by the transport layer.
///
/// Guests receive empty successful results for read aggregations and an
/// explicit denial for writes; disabled accounts are denied writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub guest: bool,
    pub disabled: bool,
}

impl User {
    pub fn is_guest(&self) -> bool {
        self.guest
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// A caller allowed to mutate marks and favorites.
    pub fn can_write(&self) -> bool {
        !self.guest && !self.disabled
    }
}
