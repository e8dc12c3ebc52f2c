use crate::{
    abstract_trait::stock::service::{DynStockCommandService, DynStockQueryService},
    domain::{
        requests::{CreateStockRequest, UpdateStockRequest},
        response::{StockMessageResponse, StockResponse},
    },
    middleware::extract::{JsonBody, StockId},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/stock",
    tag = "Stock",
    request_body = CreateStockRequest,
    responses(
        (status = 200, description = "Stock created", body = StockMessageResponse),
        (status = 400, description = "Malformed request body", body = shared::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::errors::ErrorResponse)
    )
)]
pub async fn create_stock(
    Extension(service): Extension<DynStockCommandService>,
    JsonBody(body): JsonBody<CreateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_stock(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// A missing id answers with the zero-valued record rather than 404, which is
/// what existing clients of this endpoint rely on.
#[utoipa::path(
    get,
    path = "/stock/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Stock details, zero-valued when the id does not exist", body = StockResponse),
        (status = 400, description = "Invalid stock id", body = shared::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::errors::ErrorResponse)
    )
)]
pub async fn get_stock(
    Extension(service): Extension<DynStockQueryService>,
    StockId(id): StockId,
) -> Result<impl IntoResponse, HttpError> {
    let stock = service.find_by_id(id).await?.unwrap_or_default();

    Ok((StatusCode::OK, Json(stock)))
}

#[utoipa::path(
    get,
    path = "/stock",
    tag = "Stock",
    responses(
        (status = 200, description = "All stocks", body = Vec<StockResponse>),
        (status = 500, description = "Internal server error", body = shared::errors::ErrorResponse)
    )
)]
pub async fn get_all_stock(
    Extension(service): Extension<DynStockQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let stocks = service.find_all().await?;
    Ok((StatusCode::OK, Json(stocks)))
}

#[utoipa::path(
    put,
    path = "/stock/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock updated; message carries the affected row count", body = StockMessageResponse),
        (status = 400, description = "Invalid stock id or body", body = shared::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::errors::ErrorResponse)
    )
)]
pub async fn update_stock(
    Extension(service): Extension<DynStockCommandService>,
    StockId(id): StockId,
    JsonBody(mut body): JsonBody<UpdateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    let response = service.update_stock(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/stock/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Stock deleted; message carries the affected row count", body = StockMessageResponse),
        (status = 400, description = "Invalid stock id", body = shared::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::errors::ErrorResponse)
    )
)]
pub async fn delete_stock(
    Extension(service): Extension<DynStockCommandService>,
    StockId(id): StockId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_stock(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/stock", post(create_stock).get(get_all_stock))
        .route(
            "/stock/{id}",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .layer(Extension(app_state.di_container.stock_query.clone()))
        .layer(Extension(app_state.di_container.stock_command.clone()))
}
