//! Analytics service

use validator::Validate;

use crate::{
    error::AppResult,
    models::analytics::{Analytics, CreateAnalytics},
    repository::Repository,
};

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Repository,
}

impl AnalyticsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, billboard_id: Option<&str>) -> AppResult<Vec<Analytics>> {
        Ok(self.repository.analytics.list(billboard_id).await)
    }

    /// Record a people count; the referenced billboard's views grow by it
    pub async fn record(&self, data: CreateAnalytics) -> AppResult<Analytics> {
        data.validate()?;

        let row = self.repository.analytics.create(data).await;
        tracing::info!(
            analytics_id = %row.id,
            billboard_id = %row.billboard_id,
            "Recorded {} people",
            row.total_people
        );
        Ok(row)
    }
}
