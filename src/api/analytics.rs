//! Analytics API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::analytics::{Analytics, AnalyticsQuery, CreateAnalytics},
    AppState,
};

use super::JsonBody;

/// List analytics, optionally for one billboard
#[utoipa::path(
    get,
    path = "/analytics",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics list", body = Vec<Analytics>)
    )
)]
pub async fn list_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<Vec<Analytics>>> {
    let billboard_id = query.billboard_id.as_deref().filter(|id| !id.is_empty());
    let rows = state.services.analytics.list(billboard_id).await?;
    Ok(Json(rows))
}

/// List analytics for a billboard
#[utoipa::path(
    get,
    path = "/analytics/{billboard_id}",
    tag = "analytics",
    params(("billboard_id" = String, Path, description = "Billboard ID")),
    responses(
        (status = 200, description = "Analytics list", body = Vec<Analytics>)
    )
)]
pub async fn list_billboard_analytics(
    State(state): State<AppState>,
    Path(billboard_id): Path<String>,
) -> AppResult<Json<Vec<Analytics>>> {
    let rows = state.services.analytics.list(Some(&billboard_id)).await?;
    Ok(Json(rows))
}

/// Record a people count
#[utoipa::path(
    post,
    path = "/analytics",
    tag = "analytics",
    request_body = CreateAnalytics,
    responses(
        (status = 201, description = "Analytics recorded", body = Analytics),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_analytics(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateAnalytics>,
) -> AppResult<(StatusCode, Json<Analytics>)> {
    let row = state.services.analytics.record(data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
