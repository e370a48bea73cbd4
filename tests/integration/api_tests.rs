//! API integration tests
//!
//! Every test drives the full router in-process against its own seeded
//! repository.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use billboard_server::{
    api,
    config::{AppConfig, SeedConfig},
    models::Billboard,
    repository::Repository,
    services::{
        people_counter::{CountResult, PeopleCounter},
        Services,
    },
    AppResult, AppState,
};

/// Counter that always reports the same figures
struct FixedCounter(i64);

#[async_trait]
impl PeopleCounter for FixedCounter {
    async fn count(&self, _billboard: &Billboard) -> AppResult<CountResult> {
        Ok(CountResult {
            total_people: self.0,
            video_duration: "2:05".to_string(),
            frames_processed: 3000,
        })
    }
}

async fn test_app() -> Router {
    let config = AppConfig::default();
    let repository = Repository::seeded(&config.seed)
        .await
        .expect("Failed to seed repository");
    build_app(config, repository)
}

fn build_app(config: AppConfig, repository: Repository) -> Router {
    let services = Services::new(repository, Arc::new(FixedCounter(700)));
    api::router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

fn billboard_body(daily: i64) -> Value {
    json!({
        "name": "Post Office Junction",
        "latitude": 8.49,
        "longitude": 4.55,
        "size": "40ft x 12ft",
        "imageUrl": "https://images.example.com/post-office.jpg",
        "dailyEstimatedViews": daily,
        "weeklyEstimatedViews": daily * 7,
        "monthlyEstimatedViews": daily * 30,
        "address": "Post Office Area, Ilorin",
    })
}

async fn create_billboard(app: &Router, daily: i64) -> String {
    let (status, body) = post(app, "/api/billboards", billboard_body(daily)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("No billboard ID").to_string()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/api/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["billboards"], 6);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["email"], "admin@kwarastate.gov.ng");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/auth/login", json!({ "username": "admin" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username and password are required");

    let (status, _) = send(&app, Method::POST, "/api/auth/login", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Billboards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_and_get_billboard() {
    let app = test_app().await;
    let id = create_billboard(&app, 1000).await;

    let (status, body) = get(&app, &format!("/api/billboards/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Post Office Junction");
    assert_eq!(body["latitude"], 8.49);
    assert_eq!(body["size"], "40ft x 12ft");
    assert_eq!(body["status"], "available");
    assert_eq!(body["dailyEstimatedViews"], 1000);
    assert_eq!(body["description"], Value::Null);

    let (_, list) = get(&app, "/api/billboards").await;
    assert_eq!(list.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_invalid_billboard_rejected() {
    let app = test_app().await;

    let mut body = billboard_body(10);
    body["latitude"] = json!(200);
    body["name"] = json!("Out Of Range");

    let (status, response) = post(&app, "/api/billboards", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Validation error");
    assert!(response["errors"]["latitude"].is_array());

    let (_, list) = get(&app, "/api/billboards").await;
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["name"] != "Out Of Range"));
}

#[tokio::test]
async fn test_malformed_billboard_body_rejected() {
    let app = test_app().await;

    let (status, _) = post(&app, "/api/billboards", json!({ "name": "No coordinates" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = billboard_body(10);
    body["status"] = json!("reserved");
    let (status, _) = post(&app, "/api/billboards", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_billboard() {
    let app = test_app().await;
    let id = create_billboard(&app, 1000).await;

    let (status, body) = patch(
        &app,
        &format!("/api/billboards/{}", id),
        json!({ "status": "occupied", "address": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "occupied");
    assert_eq!(body["address"], Value::Null);
    assert_eq!(body["name"], "Post Office Junction");

    let (status, _) = patch(&app, "/api/billboards/missing", json!({ "name": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = patch(
        &app,
        &format!("/api/billboards/{}", id),
        json!({ "monthlyEstimatedViews": -5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blank_optional_billboard_fields_stored_as_null() {
    let app = test_app().await;

    let mut body = billboard_body(1000);
    body["imageUrl"] = json!("");
    body["address"] = json!("");
    body["description"] = json!("");
    let (status, created) = post(&app, "/api/billboards", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["imageUrl"], Value::Null);
    assert_eq!(created["address"], Value::Null);
    assert_eq!(created["description"], Value::Null);

    let id = create_billboard(&app, 1000).await;
    let (status, updated) = patch(
        &app,
        &format!("/api/billboards/{}", id),
        json!({ "imageUrl": "", "address": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["imageUrl"], Value::Null);
    assert_eq!(updated["address"], Value::Null);
    assert_eq!(updated["name"], "Post Office Junction");
}

#[tokio::test]
async fn test_delete_billboard_twice() {
    let app = test_app().await;
    let id = create_billboard(&app, 1000).await;
    let uri = format!("/api/billboards/{}", id);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Billboard not found");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Booking requests
// ---------------------------------------------------------------------------

fn request_body(name: &str) -> Value {
    json!({
        "billboardId": "any-billboard",
        "name": name,
        "email": "buyer@example.com",
        "phone": "+234 803 000 0000",
    })
}

#[tokio::test]
async fn test_submit_request_defaults() {
    let app = test_app().await;

    let before = chrono::Utc::now();
    let (status, body) = post(&app, "/api/requests", request_body("Ngozi Adeyemi")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["message"], Value::Null);

    let submitted: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["submittedAt"].clone()).unwrap();
    assert!(submitted >= before);

    let (status, fetched) = get(&app, &format!("/api/requests/{}", body["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_blank_request_message_stored_as_null() {
    let app = test_app().await;

    let mut body = request_body("Blank Message");
    body["message"] = json!("");
    let (status, created) = post(&app, "/api/requests", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], Value::Null);
}

#[tokio::test]
async fn test_requests_listed_newest_first() {
    let app = test_app().await;

    post(&app, "/api/requests", request_body("Older Buyer")).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    post(&app, "/api/requests", request_body("Newer Buyer")).await;

    let (status, list) = get(&app, "/api/requests").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["name"], "Newer Buyer");
    assert_eq!(list[1]["name"], "Older Buyer");

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = list
        .iter()
        .map(|r| serde_json::from_value(r["submittedAt"].clone()).unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_invalid_request_rejected() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/requests",
        json!({
            "billboardId": "b",
            "name": "A",
            "email": "nope",
            "phone": "123",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["name", "email", "phone"] {
        assert!(body["errors"][field].is_array(), "no violation for {}", field);
    }
}

#[tokio::test]
async fn test_request_status_last_write_wins() {
    let app = test_app().await;
    let (_, created) = post(&app, "/api/requests", request_body("Tunde Bakare")).await;
    let uri = format!("/api/requests/{}", created["id"].as_str().unwrap());

    let (status, body) = patch(&app, &uri, json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");

    let (status, body) = patch(&app, &uri, json!({ "status": "rejected" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");

    let (_, stored) = get(&app, &uri).await;
    assert_eq!(stored["status"], "rejected");
    assert_eq!(stored["submittedAt"], created["submittedAt"]);
}

#[tokio::test]
async fn test_request_status_errors() {
    let app = test_app().await;
    let (_, created) = post(&app, "/api/requests", request_body("Tunde Bakare")).await;
    let uri = format!("/api/requests/{}", created["id"].as_str().unwrap());

    let (status, body) = patch(&app, &uri, json!({ "status": "archived" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");

    let (status, _) = patch(&app, &uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = patch(&app, "/api/requests/missing", json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/requests/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_analytics_accumulate_onto_billboard() {
    let app = test_app().await;
    let id = create_billboard(&app, 1000).await;
    let uri = format!("/api/billboards/{}", id);

    let (status, row) = post(
        &app,
        "/api/analytics",
        json!({ "billboardId": id, "totalPeople": 500 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row["totalPeople"], 500);
    assert!(row["processedAt"].is_string());
    assert!(row["hour"].is_number());

    let (_, billboard) = get(&app, &uri).await;
    assert_eq!(billboard["dailyEstimatedViews"], 1500);
    assert_eq!(billboard["weeklyEstimatedViews"], 7500);
    assert_eq!(billboard["monthlyEstimatedViews"], 30500);

    post(
        &app,
        "/api/analytics",
        json!({ "billboardId": id, "totalPeople": 500 }),
    )
    .await;
    let (_, billboard) = get(&app, &uri).await;
    assert_eq!(billboard["dailyEstimatedViews"], 2000);

    let (_, by_path) = get(&app, &format!("/api/analytics/{}", id)).await;
    assert_eq!(by_path.as_array().unwrap().len(), 2);
    let (_, by_query) = get(&app, &format!("/api/analytics?billboardId={}", id)).await;
    assert_eq!(by_query, by_path);
}

#[tokio::test]
async fn test_analytics_for_unknown_billboard() {
    let app = test_app().await;
    let (_, before) = get(&app, "/api/billboards").await;

    let (status, row) = post(
        &app,
        "/api/analytics",
        json!({ "billboardId": "does-not-exist", "totalPeople": 500 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row["billboardId"], "does-not-exist");

    let (_, after) = get(&app, "/api/billboards").await;
    assert_eq!(before, after);

    let (_, all) = get(&app, "/api/analytics").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_analytics_validation() {
    let app = test_app().await;

    let (status, _) = post(&app, "/api/analytics", json!({ "billboardId": "b" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        &app,
        "/api/analytics",
        json!({ "billboardId": "b", "totalPeople": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["total_people"].is_array());
}

// ---------------------------------------------------------------------------
// Video upload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_upload_video() {
    let app = test_app().await;
    let id = create_billboard(&app, 1000).await;

    let (status, body) = post(&app, "/api/upload-video", json!({ "billboardId": id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Video processed successfully");
    assert_eq!(body["result"]["totalPeople"], 700);
    assert_eq!(body["result"]["videoDuration"], "2:05");
    assert_eq!(body["analytics"]["billboardId"], id.as_str());
    assert_eq!(body["analytics"]["framesProcessed"], 3000);

    let (_, billboard) = get(&app, &format!("/api/billboards/{}", id)).await;
    assert_eq!(billboard["dailyEstimatedViews"], 1700);
}

#[tokio::test]
async fn test_upload_video_errors() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/upload-video", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Billboard ID is required");

    let (status, _) = post(&app, "/api/upload-video", json!({ "billboardId": "ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stats() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalBillboards"], 6);
    assert_eq!(body["availableBillboards"], 4);
    assert_eq!(body["occupiedBillboards"], 2);
    assert_eq!(body["totalViews"], 2_783_100);
    assert_eq!(body["pendingRequests"], 2);
    assert_eq!(body["weeklyGrowth"], 12.5);
}

#[tokio::test]
async fn test_unseeded_instance_is_isolated() {
    let config = AppConfig {
        seed: SeedConfig {
            enabled: false,
            ..SeedConfig::default()
        },
        ..AppConfig::default()
    };
    let repository = Repository::seeded(&config.seed)
        .await
        .expect("Failed to seed repository");
    let app = build_app(config, repository);

    let (_, billboards) = get(&app, "/api/billboards").await;
    assert!(billboards.as_array().unwrap().is_empty());

    let (status, _) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
