//! People counting collaborator used by video uploads
//!
//! The platform does not analyse footage itself. It hands the billboard to a
//! [`PeopleCounter`] and persists whatever count comes back. The bundled
//! [`SimulatedPeopleCounter`] draws random figures around the billboard's
//! daily estimate and stands in until a real vision service is plugged in.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    config::CounterConfig,
    error::{AppError, AppResult},
    models::Billboard,
};

/// Outcome of analysing one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountResult {
    pub total_people: i64,
    /// "M:SS"
    pub video_duration: String,
    pub frames_processed: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleCounter: Send + Sync {
    /// Count the people seen passing the given billboard
    async fn count(&self, billboard: &Billboard) -> AppResult<CountResult>;
}

/// Random stand-in for a real vision service
#[derive(Debug, Clone)]
pub struct SimulatedPeopleCounter {
    min_factor: f64,
    max_factor: f64,
}

impl SimulatedPeopleCounter {
    /// Build a counter from the configured factors. Negative factors are
    /// raised to zero and an inverted range collapses onto `min_factor`.
    pub fn new(config: &CounterConfig) -> AppResult<Self> {
        if !config.min_factor.is_finite() || !config.max_factor.is_finite() {
            return Err(AppError::PeopleCounter(format!(
                "counter factors must be finite, got {}..{}",
                config.min_factor, config.max_factor
            )));
        }

        let min_factor = config.min_factor.max(0.0);
        Ok(Self {
            min_factor,
            max_factor: config.max_factor.max(min_factor),
        })
    }

    fn sample(&self, daily_views: i64) -> CountResult {
        let mut rng = rand::thread_rng();

        let factor = if self.max_factor > self.min_factor {
            rng.gen_range(self.min_factor..self.max_factor)
        } else {
            self.min_factor
        };
        let minutes: u32 = rng.gen_range(1..=10);
        let seconds: u32 = rng.gen_range(0..60);

        CountResult {
            total_people: (daily_views.max(0) as f64 * factor).floor() as i64,
            video_duration: format!("{}:{:02}", minutes, seconds),
            frames_processed: rng.gen_range(1000..6000),
        }
    }
}

#[async_trait]
impl PeopleCounter for SimulatedPeopleCounter {
    async fn count(&self, billboard: &Billboard) -> AppResult<CountResult> {
        Ok(self.sample(billboard.daily_estimated_views))
    }
}
