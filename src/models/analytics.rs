//! Analytics model (people-count observations)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// People count observed for a billboard at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub id: String,
    pub billboard_id: String,
    pub total_people: i64,
    /// Length of the analysed footage, "M:SS"
    pub video_duration: Option<String>,
    pub frames_processed: Option<i64>,
    pub processed_at: DateTime<Utc>,
    /// Hour of day (0-23)
    pub hour: Option<u32>,
    /// Day of week (0 = Sunday)
    pub day_of_week: Option<u32>,
}

/// Create analytics request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalytics {
    #[validate(length(min = 1, message = "Billboard ID is required"))]
    pub billboard_id: String,
    #[validate(range(min = 0, message = "People count cannot be negative"))]
    pub total_people: i64,
    pub video_duration: Option<String>,
    #[validate(range(min = 0, message = "Frame count cannot be negative"))]
    pub frames_processed: Option<i64>,
    /// Defaults to the hour of processing
    #[validate(range(max = 23, message = "Hour must be between 0 and 23"))]
    pub hour: Option<u32>,
    /// Defaults to the weekday of processing
    #[validate(range(max = 6, message = "Day of week must be between 0 and 6"))]
    pub day_of_week: Option<u32>,
}

/// Query parameters for analytics listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    /// Restrict to one billboard
    pub billboard_id: Option<String>,
}
