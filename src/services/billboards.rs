//! Billboards service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::billboard::{Billboard, CreateBillboard, UpdateBillboard},
    repository::Repository,
};

#[derive(Clone)]
pub struct BillboardsService {
    repository: Repository,
}

impl BillboardsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Billboard>> {
        Ok(self.repository.billboards.list().await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Billboard> {
        self.repository
            .billboards
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::BillboardNotFound(id.to_string()))
    }

    pub async fn create(&self, data: CreateBillboard) -> AppResult<Billboard> {
        data.validate()?;

        let billboard = self.repository.billboards.create(data).await;
        tracing::info!(billboard_id = %billboard.id, "Created billboard {}", billboard.name);
        Ok(billboard)
    }

    pub async fn update(&self, id: &str, data: UpdateBillboard) -> AppResult<Billboard> {
        data.validate()?;

        let billboard = self
            .repository
            .billboards
            .update(id, data)
            .await
            .ok_or_else(|| AppError::BillboardNotFound(id.to_string()))?;
        tracing::info!(billboard_id = %id, "Updated billboard");
        Ok(billboard)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.billboards.delete(id).await {
            return Err(AppError::BillboardNotFound(id.to_string()));
        }
        tracing::info!(billboard_id = %id, "Deleted billboard");
        Ok(())
    }
}
