//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, auth, billboards, health, requests, stats, video};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billboard API",
        version = "0.1.0",
        description = "Billboard advertising management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Billboards
        billboards::list_billboards,
        billboards::get_billboard,
        billboards::create_billboard,
        billboards::update_billboard,
        billboards::delete_billboard,
        // Analytics
        analytics::list_analytics,
        analytics::list_billboard_analytics,
        analytics::create_analytics,
        video::upload_video,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request_status,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::UserInfo,
            // Billboards
            crate::models::billboard::Billboard,
            crate::models::billboard::CreateBillboard,
            crate::models::billboard::UpdateBillboard,
            crate::models::enums::BillboardStatus,
            // Analytics
            crate::models::analytics::Analytics,
            crate::models::analytics::CreateAnalytics,
            crate::services::people_counter::CountResult,
            video::VideoUploadRequest,
            video::VideoUploadResponse,
            // Requests
            crate::models::request::BookingRequest,
            crate::models::request::CreateBookingRequest,
            crate::models::request::UpdateRequestStatus,
            crate::models::enums::RequestStatus,
            // Stats
            crate::services::stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin login"),
        (name = "billboards", description = "Billboard inventory"),
        (name = "analytics", description = "People counts and video processing"),
        (name = "requests", description = "Booking requests"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
