//! Booking requests service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RequestStatus,
        request::{BookingRequest, CreateBookingRequest},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List requests, newest first
    pub async fn list(&self) -> AppResult<Vec<BookingRequest>> {
        Ok(self.repository.requests.list().await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<BookingRequest> {
        self.repository
            .requests
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::RequestNotFound(id.to_string()))
    }

    /// Record a new booking inquiry
    pub async fn submit(&self, data: CreateBookingRequest) -> AppResult<BookingRequest> {
        data.validate()?;

        let request = self.repository.requests.create(data).await;
        tracing::info!(
            request_id = %request.id,
            billboard_id = %request.billboard_id,
            "New booking request submitted"
        );
        Ok(request)
    }

    /// Change the review status of a request
    pub async fn update_status(&self, id: &str, status: Option<&str>) -> AppResult<BookingRequest> {
        let status: RequestStatus = status
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?;

        let request = self
            .repository
            .requests
            .update_status(id, status)
            .await
            .ok_or_else(|| AppError::RequestNotFound(id.to_string()))?;
        tracing::info!(request_id = %id, "Request marked {}", status);
        Ok(request)
    }
}
