//! HTTP surface for the Reelmark media annotation service.

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use errors::{AppError, AppResult};
pub use infra::app_state::AppState;
