use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use reelmark_core::api::ApiResponse;
use reelmark_core::application::{CreateFolder, UpdateFolder};
use reelmark_model::{Folder, User};

pub async fn list_folders_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<ApiResponse<Vec<Folder>>>> {
    let folders = state.favorites.list_folders(&user).await?;
    Ok(Json(ApiResponse::success(folders)))
}

pub async fn get_folder_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    let folder = state.favorites.get_folder(&user, id).await?;
    Ok(Json(ApiResponse::success(folder)))
}

pub async fn create_folder_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateFolder>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    let folder = state.favorites.create_folder(&user, request).await?;
    Ok(Json(ApiResponse::success(folder)))
}

pub async fn update_folder_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<UpdateFolder>,
) -> AppResult<Json<ApiResponse<Folder>>> {
    let folder = state.favorites.update_folder(&user, request).await?;
    Ok(Json(ApiResponse::success(folder)))
}

pub async fn delete_folder_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.favorites.delete_folder(&user, id).await?;
    Ok(Json(
        ApiResponse::success(()).with_message("folder deleted".to_string()),
    ))
}
