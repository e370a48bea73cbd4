//! Authentication endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, UserInfo},
    AppState,
};

use super::JsonBody;

/// Log in with username and password
///
/// No token is issued; the returned user is the whole response.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserInfo),
        (status = 400, description = "Missing username or password", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> AppResult<Json<UserInfo>> {
    let (username, password) = match (request.username.as_deref(), request.password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ))
        }
    };

    let user = state.services.auth.authenticate(username, password).await?;
    Ok(Json(user))
}
