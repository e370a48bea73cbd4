//! Billboard model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::BillboardStatus;

/// Billboard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Physical dimensions, e.g. "48ft x 14ft"
    pub size: String,
    pub image_url: Option<String>,
    pub status: BillboardStatus,
    pub daily_estimated_views: i64,
    pub weekly_estimated_views: i64,
    pub monthly_estimated_views: i64,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl Billboard {
    /// Add an observed people count onto the three running view counters
    pub fn accumulate_views(&mut self, people: i64) {
        self.daily_estimated_views = self.daily_estimated_views.saturating_add(people);
        self.weekly_estimated_views = self.weekly_estimated_views.saturating_add(people);
        self.monthly_estimated_views = self.monthly_estimated_views.saturating_add(people);
    }

    /// Merge the fields present in a partial update
    pub fn apply(&mut self, data: UpdateBillboard) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(latitude) = data.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = data.longitude {
            self.longitude = longitude;
        }
        if let Some(size) = data.size {
            self.size = size;
        }
        if let Some(image_url) = data.image_url {
            self.image_url = image_url;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if let Some(views) = data.daily_estimated_views {
            self.daily_estimated_views = views;
        }
        if let Some(views) = data.weekly_estimated_views {
            self.weekly_estimated_views = views;
        }
        if let Some(views) = data.monthly_estimated_views {
            self.monthly_estimated_views = views;
        }
        if let Some(address) = data.address {
            self.address = address;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
    }
}

/// Create billboard request
///
/// Blank `imageUrl`, `address` and `description` are stored as null.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillboard {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
    #[validate(length(min = 1, message = "Size is required"))]
    pub size: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    /// Defaults to "available"
    pub status: Option<BillboardStatus>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub daily_estimated_views: Option<i64>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub weekly_estimated_views: Option<i64>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub monthly_estimated_views: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub address: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial billboard update.
///
/// Omitted fields are left untouched. The nullable fields (`imageUrl`,
/// `address`, `description`) are cleared by an explicit `null` or `""`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillboard {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
    #[validate(length(min = 1, message = "Size cannot be empty"))]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "super::clearable_text")]
    #[schema(value_type = Option<String>)]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<Option<String>>,
    pub status: Option<BillboardStatus>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub daily_estimated_views: Option<i64>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub weekly_estimated_views: Option<i64>,
    #[validate(range(min = 0, message = "View counts cannot be negative"))]
    pub monthly_estimated_views: Option<i64>,
    #[serde(default, deserialize_with = "super::clearable_text")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::clearable_text")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}
