use axum::{
    Router,
    routing::{delete, get},
};

use crate::handlers::{
    favorites::{
        create_favorite_handler, delete_favorite_handler, list_favorites_handler,
        update_favorite_handler,
    },
    folders::{
        create_folder_handler, delete_folder_handler, get_folder_handler, list_folders_handler,
        update_folder_handler,
    },
    marks::{
        aggregate_marks_handler, create_mark_handler, delete_mark_handler, list_marks_handler,
        update_mark_handler,
    },
};
use crate::infra::app_state::AppState;

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Favorite folders
        .route(
            "/folders",
            get(list_folders_handler)
                .post(create_folder_handler)
                .put(update_folder_handler),
        )
        .route(
            "/folders/{id}",
            get(get_folder_handler).delete(delete_folder_handler),
        )
        // Favorites
        .route(
            "/favorites",
            get(list_favorites_handler)
                .post(create_favorite_handler)
                .put(update_favorite_handler),
        )
        .route("/favorites/{id}", delete(delete_favorite_handler))
        // Marks
        .route(
            "/marks",
            get(list_marks_handler)
                .post(create_mark_handler)
                .put(update_mark_handler),
        )
        .route("/marks/all", get(aggregate_marks_handler))
        .route("/marks/{id}", delete(delete_mark_handler))
}
