use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use reelmark_core::api::ApiResponse;
use reelmark_core::application::{CreateFavorite, UpdateFavorite};
use reelmark_model::{Favorite, User};

#[derive(Debug, Deserialize)]
pub struct FavoriteListQuery {
    /// 0 (or absent) lists all of the user's favorites.
    #[serde(default)]
    pub folder_id: i64,
}

pub async fn list_favorites_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<FavoriteListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Favorite>>>> {
    let favorites = state
        .favorites
        .list_favorites(&user, query.folder_id)
        .await?;
    Ok(Json(ApiResponse::success(favorites)))
}

pub async fn create_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateFavorite>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let favorite = state.favorites.create_favorite(&user, request).await?;
    Ok(Json(ApiResponse::success(favorite)))
}

pub async fn update_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<UpdateFavorite>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let favorite = state.favorites.update_favorite(&user, request).await?;
    Ok(Json(ApiResponse::success(favorite)))
}

pub async fn delete_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.favorites.delete_favorite(&user, id).await?;
    Ok(Json(
        ApiResponse::success(()).with_message("favorite removed".to_string()),
    ))
}
