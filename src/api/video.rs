//! Video upload endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::Analytics,
    services::people_counter::CountResult,
    AppState,
};

use super::JsonBody;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadRequest {
    #[serde(default)]
    pub billboard_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoUploadResponse {
    pub message: String,
    pub analytics: Analytics,
    pub result: CountResult,
}

/// Process a billboard video and record the people count
///
/// Footage is not stored; only the resulting count is persisted.
#[utoipa::path(
    post,
    path = "/upload-video",
    tag = "analytics",
    request_body = VideoUploadRequest,
    responses(
        (status = 200, description = "Video processed", body = VideoUploadResponse),
        (status = 400, description = "Billboard ID missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Billboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<VideoUploadRequest>,
) -> AppResult<Json<VideoUploadResponse>> {
    let (analytics, result) = state
        .services
        .video
        .process(request.billboard_id.as_deref())
        .await?;

    Ok(Json(VideoUploadResponse {
        message: "Video processed successfully".to_string(),
        analytics,
        result,
    }))
}
