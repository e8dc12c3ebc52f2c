use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),
}

impl RepositoryError {
    /// True when the pool could not hand out a connection in time or has been closed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RepositoryError::Sqlx(SqlxError::PoolTimedOut | SqlxError::PoolClosed)
        )
    }
}
