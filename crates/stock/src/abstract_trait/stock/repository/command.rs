use crate::domain::requests::{CreateStockRequest, UpdateStockRequest};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockCommandRepository = Arc<dyn StockCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockCommandRepositoryTrait {
    /// Inserts a row and returns the id the database assigned to it.
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError>;
    /// Overwrites name, price and company of `req.id`; returns the affected row count.
    async fn update_stock(&self, req: &UpdateStockRequest) -> Result<u64, RepositoryError>;
    async fn delete_stock(&self, id: i64) -> Result<u64, RepositoryError>;
}
