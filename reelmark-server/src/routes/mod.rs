pub mod v1;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth;
use crate::infra::app_state::AppState;

/// Assemble the application router: versioned API behind the caller
/// identification middleware, with tracing and CORS applied outermost.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", v1::create_v1_router())
        .layer(middleware::from_fn(auth::identify))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
