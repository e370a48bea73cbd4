//! Billboard API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::billboard::{Billboard, CreateBillboard, UpdateBillboard},
    AppState,
};

use super::JsonBody;

/// List all billboards
#[utoipa::path(
    get,
    path = "/billboards",
    tag = "billboards",
    responses(
        (status = 200, description = "Billboard list", body = Vec<Billboard>)
    )
)]
pub async fn list_billboards(State(state): State<AppState>) -> AppResult<Json<Vec<Billboard>>> {
    let billboards = state.services.billboards.list().await?;
    Ok(Json(billboards))
}

/// Get billboard by ID
#[utoipa::path(
    get,
    path = "/billboards/{id}",
    tag = "billboards",
    params(("id" = String, Path, description = "Billboard ID")),
    responses(
        (status = 200, description = "Billboard details", body = Billboard),
        (status = 404, description = "Billboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_billboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Billboard>> {
    let billboard = state.services.billboards.get_by_id(&id).await?;
    Ok(Json(billboard))
}

/// Create a billboard
#[utoipa::path(
    post,
    path = "/billboards",
    tag = "billboards",
    request_body = CreateBillboard,
    responses(
        (status = 201, description = "Billboard created", body = Billboard),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_billboard(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBillboard>,
) -> AppResult<(StatusCode, Json<Billboard>)> {
    let billboard = state.services.billboards.create(data).await?;
    Ok((StatusCode::CREATED, Json(billboard)))
}

/// Partially update a billboard
#[utoipa::path(
    patch,
    path = "/billboards/{id}",
    tag = "billboards",
    params(("id" = String, Path, description = "Billboard ID")),
    request_body = UpdateBillboard,
    responses(
        (status = 200, description = "Billboard updated", body = Billboard),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 404, description = "Billboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_billboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<UpdateBillboard>,
) -> AppResult<Json<Billboard>> {
    let billboard = state.services.billboards.update(&id, data).await?;
    Ok(Json(billboard))
}

/// Delete a billboard
#[utoipa::path(
    delete,
    path = "/billboards/{id}",
    tag = "billboards",
    params(("id" = String, Path, description = "Billboard ID")),
    responses(
        (status = 204, description = "Billboard deleted"),
        (status = 404, description = "Billboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_billboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.billboards.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
