//! API handlers for the billboard REST endpoints

pub mod analytics;
pub mod auth;
pub mod billboards;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod stats;
pub mod video;

use std::any::Any;

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose parse failures become 400 responses
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        // Billboards
        .route(
            "/billboards",
            get(billboards::list_billboards).post(billboards::create_billboard),
        )
        .route(
            "/billboards/:id",
            get(billboards::get_billboard)
                .patch(billboards::update_billboard)
                .delete(billboards::delete_billboard),
        )
        // Analytics
        .route(
            "/analytics",
            get(analytics::list_analytics).post(analytics::create_analytics),
        )
        .route(
            "/analytics/:billboard_id",
            get(analytics::list_billboard_analytics),
        )
        // Booking requests
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route(
            "/requests/:id",
            get(requests::get_request).patch(requests::update_request_status),
        )
        // Video processing
        .route("/upload-video", post(video::upload_video))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(detail).into_response()
}
