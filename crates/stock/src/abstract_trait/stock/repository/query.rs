use crate::model::Stock as StockModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockQueryRepository = Arc<dyn StockQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<StockModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<StockModel>, RepositoryError>;
}
