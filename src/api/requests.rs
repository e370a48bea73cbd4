//! Booking request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::request::{BookingRequest, CreateBookingRequest, UpdateRequestStatus},
    AppState,
};

use super::JsonBody;

/// List booking requests, newest first
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Booking requests", body = Vec<BookingRequest>)
    )
)]
pub async fn list_requests(State(state): State<AppState>) -> AppResult<Json<Vec<BookingRequest>>> {
    let requests = state.services.requests.list().await?;
    Ok(Json(requests))
}

/// Get booking request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Booking request", body = BookingRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookingRequest>> {
    let request = state.services.requests.get_by_id(&id).await?;
    Ok(Json(request))
}

/// Submit a booking request (public contact form)
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Request submitted", body = BookingRequest),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingRequest>)> {
    let request = state.services.requests.submit(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve, reject or reset a booking request
#[utoipa::path(
    patch,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Request updated", body = BookingRequest),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<UpdateRequestStatus>,
) -> AppResult<Json<BookingRequest>> {
    let request = state
        .services
        .requests
        .update_status(&id, data.status.as_deref())
        .await?;
    Ok(Json(request))
}
