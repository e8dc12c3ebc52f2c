use crate::errors::{ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) if repo_err.is_unavailable() => {
                error!("❌ Database unavailable: {repo_err}");
                HttpError::ServiceUnavailable("Database unavailable".into())
            }
            ServiceError::Repo(RepositoryError::Sqlx(sqlx_err)) => {
                error!("❌ Database error: {sqlx_err}");
                HttpError::Internal("Database error".into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn pool_timeout_maps_to_service_unavailable() {
        let err = ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(
            HttpError::from(err).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn other_database_failures_map_to_internal() {
        let err = ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::RowNotFound));
        let http = HttpError::from(err);
        assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(http, HttpError::Internal(msg) if msg == "Database error"));
    }

    #[tokio::test]
    async fn error_body_has_status_and_message() {
        let response = HttpError::BadRequest("Invalid stock id".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid stock id");
    }
}
