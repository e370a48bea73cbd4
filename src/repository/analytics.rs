//! Analytics repository

use chrono::{Datelike, Timelike, Utc};

use super::{new_id, SharedStore};
use crate::models::analytics::{Analytics, CreateAnalytics};

#[derive(Clone)]
pub struct AnalyticsRepository {
    store: SharedStore,
}

impl AnalyticsRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List analytics rows, optionally restricted to one billboard
    pub async fn list(&self, billboard_id: Option<&str>) -> Vec<Analytics> {
        self.store
            .read()
            .await
            .analytics
            .values()
            .filter(|row| billboard_id.map_or(true, |id| row.billboard_id == id))
            .cloned()
            .collect()
    }

    /// Store an analytics row and add its people count onto the referenced
    /// billboard's view counters.
    ///
    /// Insert and accumulation happen under the same write lock. A missing
    /// billboard leaves the row stored and the counters untouched.
    pub async fn create(&self, data: CreateAnalytics) -> Analytics {
        let now = Utc::now();
        let row = Analytics {
            id: new_id(),
            billboard_id: data.billboard_id,
            total_people: data.total_people,
            video_duration: data.video_duration,
            frames_processed: data.frames_processed,
            processed_at: now,
            hour: Some(data.hour.unwrap_or_else(|| now.hour())),
            day_of_week: Some(
                data.day_of_week
                    .unwrap_or_else(|| now.weekday().num_days_from_sunday()),
            ),
        };

        let mut store = self.store.write().await;
        store.analytics.insert(row.id.clone(), row.clone());

        match store.billboards.get_mut(&row.billboard_id) {
            Some(billboard) => {
                billboard.accumulate_views(row.total_people);
                tracing::debug!(
                    billboard_id = %billboard.id,
                    daily = billboard.daily_estimated_views,
                    "Accumulated {} people onto billboard views",
                    row.total_people
                );
            }
            None => {
                tracing::debug!(
                    billboard_id = %row.billboard_id,
                    "Analytics stored for unknown billboard, no views updated"
                );
            }
        }

        row
    }
}
