use crate::domain::response::StockResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStockQueryService = Arc<dyn StockQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<StockResponse>, ServiceError>;
    /// `None` when no row carries `id`; the caller decides how to present that.
    async fn find_by_id(&self, id: i64) -> Result<Option<StockResponse>, ServiceError>;
}
