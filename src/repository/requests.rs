//! Booking requests repository

use chrono::Utc;

use super::{new_id, SharedStore};
use crate::models::{
    enums::RequestStatus,
    request::{BookingRequest, CreateBookingRequest},
};

#[derive(Clone)]
pub struct RequestsRepository {
    store: SharedStore,
}

impl RequestsRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all requests, newest first.
    ///
    /// Requests submitted at the same instant keep reverse insertion order.
    pub async fn list(&self) -> Vec<BookingRequest> {
        let mut requests: Vec<BookingRequest> = self
            .store
            .read()
            .await
            .requests
            .values()
            .rev()
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        requests
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: &str) -> Option<BookingRequest> {
        self.store.read().await.requests.get(id).cloned()
    }

    /// Create a pending request stamped with the current time
    pub async fn create(&self, data: CreateBookingRequest) -> BookingRequest {
        let request = BookingRequest {
            id: new_id(),
            billboard_id: data.billboard_id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            submitted_at: Utc::now(),
            status: RequestStatus::Pending,
        };

        self.store
            .write()
            .await
            .requests
            .insert(request.id.clone(), request.clone());
        request
    }

    /// Set the status of a request
    pub async fn update_status(&self, id: &str, status: RequestStatus) -> Option<BookingRequest> {
        let mut store = self.store.write().await;
        let request = store.requests.get_mut(id)?;
        request.status = status;
        Some(request.clone())
    }
}
