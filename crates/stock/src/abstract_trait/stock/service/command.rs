use crate::domain::{
    requests::{CreateStockRequest, UpdateStockRequest},
    response::StockMessageResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStockCommandService = Arc<dyn StockCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockCommandServiceTrait {
    async fn create_stock(
        &self,
        req: &CreateStockRequest,
    ) -> Result<StockMessageResponse, ServiceError>;
    async fn update_stock(
        &self,
        req: &UpdateStockRequest,
    ) -> Result<StockMessageResponse, ServiceError>;
    async fn delete_stock(&self, id: i64) -> Result<StockMessageResponse, ServiceError>;
}
