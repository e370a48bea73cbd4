//! Video upload processing

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::analytics::{Analytics, CreateAnalytics},
    repository::Repository,
};

use super::people_counter::{CountResult, PeopleCounter};

#[derive(Clone)]
pub struct VideoService {
    repository: Repository,
    counter: Arc<dyn PeopleCounter>,
}

impl VideoService {
    pub fn new(repository: Repository, counter: Arc<dyn PeopleCounter>) -> Self {
        Self { repository, counter }
    }

    /// Count people for a billboard and persist the result as analytics
    pub async fn process(&self, billboard_id: Option<&str>) -> AppResult<(Analytics, CountResult)> {
        let billboard_id = billboard_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("Billboard ID is required".to_string()))?;

        let billboard = self
            .repository
            .billboards
            .get_by_id(billboard_id)
            .await
            .ok_or_else(|| AppError::BillboardNotFound(billboard_id.to_string()))?;

        let result = self.counter.count(&billboard).await?;

        let analytics = self
            .repository
            .analytics
            .create(CreateAnalytics {
                billboard_id: billboard.id.clone(),
                total_people: result.total_people,
                video_duration: Some(result.video_duration.clone()),
                frames_processed: Some(result.frames_processed),
                hour: None,
                day_of_week: None,
            })
            .await;

        tracing::info!(
            billboard_id = %billboard.id,
            frames = result.frames_processed,
            "Processed video: {} people counted",
            result.total_people
        );

        Ok((analytics, result))
    }
}
