//! Repository layer: in-memory storage for all entities

pub mod analytics;
pub mod billboards;
pub mod requests;
pub mod seed;
pub mod users;

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Analytics, Billboard, BookingRequest, User};

/// Entity maps, keyed by id and kept in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: IndexMap<String, User>,
    pub billboards: IndexMap<String, Billboard>,
    pub analytics: IndexMap<String, Analytics>,
    pub requests: IndexMap<String, BookingRequest>,
}

/// Shared handle to the store. Every mutation runs under a single write lock.
pub type SharedStore = Arc<RwLock<MemoryStore>>;

/// Main repository struct; every sub-repository shares one store
#[derive(Clone)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub billboards: billboards::BillboardsRepository,
    pub analytics: analytics::AnalyticsRepository,
    pub requests: requests::RequestsRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        let store: SharedStore = Arc::new(RwLock::new(MemoryStore::default()));
        Self {
            users: users::UsersRepository::new(store.clone()),
            billboards: billboards::BillboardsRepository::new(store.clone()),
            analytics: analytics::AnalyticsRepository::new(store.clone()),
            requests: requests::RequestsRepository::new(store),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh random identifier for a new record
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
