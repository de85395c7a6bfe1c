use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use reelmark_core::api::ApiResponse;
use reelmark_core::application::{CreateMark, UpdateMark};
use reelmark_core::reconcile::MediaWithMarks;
use reelmark_core::{MediaDescriptor, build_fingerprint};
use reelmark_model::{MarkDisplay, MediaKind, User};

#[derive(Debug, Deserialize)]
pub struct MarkListQuery {
    pub fingerprint: String,
}

#[derive(Debug, Deserialize)]
pub struct AggregateQuery {
    pub kind: MediaKind,
}

/// Mark create/update requests describe the live file; the server derives
/// its fingerprint rather than trusting one from the client.
#[derive(Debug, Deserialize)]
pub struct CreateMarkRequest {
    pub media: MediaDescriptor,
    /// 0 means "detect from the path via the storage directory".
    #[serde(default)]
    pub storage_id: i64,
    pub time_second: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMarkRequest {
    pub id: i64,
    pub media: MediaDescriptor,
    #[serde(default)]
    pub storage_id: i64,
    pub time_second: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

async fn detect_storage_id(state: &AppState, storage_id: i64, path: &str) -> i64 {
    if storage_id != 0 {
        return storage_id;
    }
    match state.storage.resolve(path).await {
        Ok(Some((id, _))) => id,
        Ok(None) => 0,
        Err(err) => {
            warn!(%err, path, "storage detection failed");
            0
        }
    }
}

pub async fn list_marks_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<MarkListQuery>,
) -> AppResult<Json<ApiResponse<Vec<MarkDisplay>>>> {
    let marks = state.marks.list(&user, &query.fingerprint).await?;
    Ok(Json(ApiResponse::success(marks)))
}

pub async fn create_mark_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateMarkRequest>,
) -> AppResult<Json<ApiResponse<MarkDisplay>>> {
    let storage_id = detect_storage_id(&state, request.storage_id, &request.media.path).await;
    let fingerprint = build_fingerprint(storage_id, &request.media);
    let mark = state
        .marks
        .create(
            &user,
            CreateMark {
                fingerprint,
                storage_id,
                original_path: request.media.path,
                time_second: request.time_second,
                title: request.title,
                content: request.content,
            },
        )
        .await?;
    Ok(Json(ApiResponse::success(mark)))
}

pub async fn update_mark_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<UpdateMarkRequest>,
) -> AppResult<Json<ApiResponse<MarkDisplay>>> {
    let storage_id = detect_storage_id(&state, request.storage_id, &request.media.path).await;
    let live_fingerprint = build_fingerprint(storage_id, &request.media);
    let mark = state
        .marks
        .update(
            &user,
            UpdateMark {
                id: request.id,
                time_second: request.time_second,
                title: request.title,
                content: request.content,
            },
            &live_fingerprint,
        )
        .await?;
    Ok(Json(ApiResponse::success(mark)))
}

pub async fn delete_mark_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.marks.delete(&user, id).await?;
    Ok(Json(
        ApiResponse::success(()).with_message("mark deleted".to_string()),
    ))
}

/// All of the caller's marks of one media kind, grouped per file and
/// merged with favorite metadata.
pub async fn aggregate_marks_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<AggregateQuery>,
) -> AppResult<Json<ApiResponse<Vec<MediaWithMarks>>>> {
    let records = state.aggregation.aggregate(&user, query.kind).await?;
    Ok(Json(ApiResponse::success(records)))
}
