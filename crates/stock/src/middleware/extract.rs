use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use shared::errors::{ErrorResponse, HttpError};
use tracing::warn;

/// JSON body extractor that decodes whatever the client sent, regardless of
/// `Content-Type`. A literal `null` decodes to the zero-valued `T`. Rejections
/// use the service's error body: 400 for malformed JSON, 422 for mistyped
/// fields.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("⚠️ Unreadable request body: {}", rejection.body_text());
            reject(rejection.status(), rejection.body_text())
        })?;

        match serde_json::from_slice::<Option<T>>(&bytes) {
            Ok(value) => Ok(Self(value.unwrap_or_default())),
            Err(e) => {
                warn!("⚠️ Rejected request body: {e}");
                let status = match e.classify() {
                    Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
                    Category::Syntax | Category::Eof | Category::Io => StatusCode::BAD_REQUEST,
                };
                Err(reject(status, e.to_string()))
            }
        }
    }
}

fn reject(status: StatusCode, detail: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse::new(format!(
            "Unable to decode the request body: {detail}"
        ))),
    )
}

/// The `{id}` path segment parsed as a stock id.
#[derive(Debug, Clone, Copy)]
pub struct StockId(pub i64);

impl<S> FromRequestParts<S> for StockId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        raw.parse::<i64>().map(StockId).map_err(|_| {
            warn!("⚠️ Rejected stock id: {raw:?}");
            HttpError::BadRequest(format!("Unable to convert '{raw}' into a stock id"))
        })
    }
}
