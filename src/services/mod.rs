//! Business logic services

pub mod analytics;
pub mod auth;
pub mod billboards;
pub mod people_counter;
pub mod requests;
pub mod stats;
pub mod video;

use std::sync::Arc;

use crate::repository::Repository;
use people_counter::PeopleCounter;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub billboards: billboards::BillboardsService,
    pub requests: requests::RequestsService,
    pub analytics: analytics::AnalyticsService,
    pub video: video::VideoService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, counter: Arc<dyn PeopleCounter>) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            billboards: billboards::BillboardsService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            analytics: analytics::AnalyticsService::new(repository.clone()),
            video: video::VideoService::new(repository.clone(), counter),
            stats: stats::StatsService::new(repository),
        }
    }
}
