use crate::{
    abstract_trait::stock::repository::StockQueryRepositoryTrait, model::Stock as StockModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct StockQueryRepository {
    db: ConnectionPool,
}

impl StockQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockQueryRepositoryTrait for StockQueryRepository {
    async fn find_all(&self) -> Result<Vec<StockModel>, RepositoryError> {
        info!("🔍 Fetching all stocks");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // The casts let integer, numeric and float column types all decode.
        let stocks = sqlx::query_as::<_, StockModel>(
            r#"
            SELECT
                stockid::BIGINT AS stockid,
                name,
                price::DOUBLE PRECISION AS price,
                company
            FROM stocks
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch stocks: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} stocks", stocks.len());
        Ok(stocks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StockModel>, RepositoryError> {
        info!("🆔 Fetching stock by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let stock = sqlx::query_as::<_, StockModel>(
            r#"
            SELECT
                stockid::BIGINT AS stockid,
                name,
                price::DOUBLE PRECISION AS price,
                company
            FROM stocks
            WHERE stockid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch stock ID {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        match &stock {
            Some(_) => info!("✅ Found stock ID {}", id),
            None => warn!("⚠️ No stock found with ID {}", id),
        }

        Ok(stock)
    }
}
