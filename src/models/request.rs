//! Booking request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::RequestStatus;

/// Booking inquiry submitted from the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: String,
    /// Referenced billboard; not checked for existence
    pub billboard_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
}

/// Create booking request
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "Please select a billboard"))]
    pub billboard_id: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,
    /// A blank message is stored as null
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub message: Option<String>,
}

/// Status change issued by an admin
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatus {
    /// One of "pending", "approved", "rejected"
    #[serde(default)]
    pub status: Option<String>,
}
