//! Core library for the Reelmark media annotation service.
//!
//! Three concerns live here:
//!
//! - **Identity**: deriving a stable, storage-scoped fingerprint for a
//!   media file that survives renames and moves ([`identity`]).
//! - **Reconciliation**: grouping a user's time-coded marks by fingerprint
//!   and merging them with favorite metadata into per-kind views
//!   ([`reconcile`]).
//! - **Persistence ports**: owner-scoped repository traits and their
//!   Postgres implementations ([`database`]), consumed by the application
//!   services ([`application`]).

pub mod api;
pub mod application;
pub mod database;
pub mod error;
pub mod identity;
pub mod reconcile;

pub use error::{MarkError, Result};
pub use identity::{HashAlg, MediaDescriptor, MediaObject, build_fingerprint};
pub use reconcile::{MediaWithMarks, UNFAVORITED_FOLDER, aggregate_marks};
