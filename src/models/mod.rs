//! Data models for the billboard platform

pub mod analytics;
pub mod billboard;
pub mod enums;
pub mod request;
pub mod user;

use serde::Deserializer;
use serde_with::{DeserializeAs, NoneAsEmptyString};

// Re-export commonly used types
pub use analytics::Analytics;
pub use billboard::Billboard;
pub use enums::{BillboardStatus, RequestStatus};
pub use request::BookingRequest;
pub use user::{User, UserInfo};

/// Deserialize a present nullable text field of a partial update.
///
/// `null` and `""` both clear the field; an absent field stays `None` through
/// `#[serde(default)]`.
pub(crate) fn clearable_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = NoneAsEmptyString::deserialize_as(deserializer)?;
    Ok(Some(value))
}
