//! Billboard advertising management platform
//!
//! REST JSON API behind the public billboard map and booking form and the
//! admin back office: billboard inventory, booking request review, and
//! people-count analytics fed by (simulated) video processing.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
