//! Billboards repository

use super::{new_id, SharedStore};
use crate::models::billboard::{Billboard, CreateBillboard, UpdateBillboard};

#[derive(Clone)]
pub struct BillboardsRepository {
    store: SharedStore,
}

impl BillboardsRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all billboards, in insertion order
    pub async fn list(&self) -> Vec<Billboard> {
        self.store.read().await.billboards.values().cloned().collect()
    }

    /// Get billboard by ID
    pub async fn get_by_id(&self, id: &str) -> Option<Billboard> {
        self.store.read().await.billboards.get(id).cloned()
    }

    /// Create a billboard, filling defaults for unset optional fields
    pub async fn create(&self, data: CreateBillboard) -> Billboard {
        let billboard = Billboard {
            id: new_id(),
            name: data.name,
            latitude: data.latitude,
            longitude: data.longitude,
            size: data.size,
            image_url: data.image_url,
            status: data.status.unwrap_or_default(),
            daily_estimated_views: data.daily_estimated_views.unwrap_or(0),
            weekly_estimated_views: data.weekly_estimated_views.unwrap_or(0),
            monthly_estimated_views: data.monthly_estimated_views.unwrap_or(0),
            address: data.address,
            description: data.description,
        };

        self.store
            .write()
            .await
            .billboards
            .insert(billboard.id.clone(), billboard.clone());
        billboard
    }

    /// Merge a partial update onto an existing billboard
    pub async fn update(&self, id: &str, data: UpdateBillboard) -> Option<Billboard> {
        let mut store = self.store.write().await;
        let billboard = store.billboards.get_mut(id)?;
        billboard.apply(data);
        Some(billboard.clone())
    }

    /// Delete a billboard. Returns whether it existed.
    pub async fn delete(&self, id: &str) -> bool {
        self.store
            .write()
            .await
            .billboards
            .shift_remove(id)
            .is_some()
    }
}
