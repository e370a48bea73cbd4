//! Dashboard statistics service

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::enums::{BillboardStatus, RequestStatus},
    repository::Repository,
};

/// Week-over-week growth shown on the dashboard. There is no history to
/// compute it from yet, so it is a fixed figure.
pub const WEEKLY_GROWTH_PLACEHOLDER: f64 = 12.5;

/// Dashboard aggregate figures
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_billboards: usize,
    pub available_billboards: usize,
    pub occupied_billboards: usize,
    /// Sum of monthly estimated views across all billboards
    pub total_views: i64,
    pub pending_requests: usize,
    pub weekly_growth: f64,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let billboards = self.repository.billboards.list().await;
        let requests = self.repository.requests.list().await;

        let count_status = |status: BillboardStatus| {
            billboards.iter().filter(|b| b.status == status).count()
        };

        Ok(DashboardStats {
            total_billboards: billboards.len(),
            available_billboards: count_status(BillboardStatus::Available),
            occupied_billboards: count_status(BillboardStatus::Occupied),
            total_views: billboards
                .iter()
                .fold(0i64, |sum, b| sum.saturating_add(b.monthly_estimated_views)),
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
            weekly_growth: WEEKLY_GROWTH_PLACEHOLDER,
        })
    }
}
