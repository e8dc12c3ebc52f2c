use crate::{
    abstract_trait::stock::repository::StockCommandRepositoryTrait,
    domain::requests::{CreateStockRequest, UpdateStockRequest},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct StockCommandRepository {
    db: ConnectionPool,
}

impl StockCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for StockCommandRepository {
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO stocks (name, price, company)
            VALUES ($1, $2, $3)
            RETURNING stockid::BIGINT
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.company)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create stock {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created stock ID {} ({})", id, req.name);
        Ok(id)
    }

    async fn update_stock(&self, req: &UpdateStockRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE stocks
            SET name = $2,
                price = $3,
                company = $4
            WHERE stockid = $1
            "#,
        )
        .bind(req.id)
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.company)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update stock ID {}: {:?}", req.id, err);
            RepositoryError::from(err)
        })?;

        let rows_affected = result.rows_affected();
        info!(
            "🔄 Updated stock ID {} (rows affected: {})",
            req.id, rows_affected
        );
        Ok(rows_affected)
    }

    async fn delete_stock(&self, id: i64) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting stock: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM stocks
            WHERE stockid = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete stock {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        let rows_affected = result.rows_affected();
        info!("✅ Deleted stock ID {} (rows affected: {})", id, rows_affected);
        Ok(rows_affected)
    }
}
