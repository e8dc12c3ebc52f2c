#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use prometheus_client::registry::Registry;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use stock::{
    abstract_trait::stock::repository::{StockCommandRepositoryTrait, StockQueryRepositoryTrait},
    di::DependenciesInject,
    domain::requests::{CreateStockRequest, UpdateStockRequest},
    handler::AppRouter,
    model::Stock,
    state::AppState,
};
use tower::ServiceExt;

/// Table stand-in with serial ids, used in place of PostgreSQL.
#[derive(Default)]
pub struct InMemoryStockRepository {
    rows: Mutex<BTreeMap<i64, Stock>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl StockQueryRepositoryTrait for InMemoryStockRepository {
    async fn find_all(&self) -> Result<Vec<Stock>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Stock>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for InMemoryStockRepository {
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<i64, RepositoryError> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };

        self.rows.lock().unwrap().insert(
            id,
            Stock {
                stockid: id,
                name: req.name.clone(),
                price: req.price,
                company: req.company.clone(),
            },
        );
        Ok(id)
    }

    async fn update_stock(&self, req: &UpdateStockRequest) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&req.id) {
            Some(row) => {
                row.name = req.name.clone();
                row.price = req.price;
                row.company = req.company.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_stock(&self, id: i64) -> Result<u64, RepositoryError> {
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

/// Fails every call with the given sqlx error.
pub struct FailingStockRepository {
    make_error: fn() -> sqlx::Error,
}

impl FailingStockRepository {
    pub fn pool_timeout() -> Self {
        Self {
            make_error: || sqlx::Error::PoolTimedOut,
        }
    }

    pub fn broken_query() -> Self {
        Self {
            make_error: || sqlx::Error::Protocol("relation \"stocks\" does not exist".into()),
        }
    }

    fn fail<T>(&self) -> Result<T, RepositoryError> {
        Err(RepositoryError::Sqlx((self.make_error)()))
    }
}

#[async_trait]
impl StockQueryRepositoryTrait for FailingStockRepository {
    async fn find_all(&self) -> Result<Vec<Stock>, RepositoryError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Stock>, RepositoryError> {
        self.fail()
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for FailingStockRepository {
    async fn create_stock(&self, _req: &CreateStockRequest) -> Result<i64, RepositoryError> {
        self.fail()
    }

    async fn update_stock(&self, _req: &UpdateStockRequest) -> Result<u64, RepositoryError> {
        self.fail()
    }

    async fn delete_stock(&self, _id: i64) -> Result<u64, RepositoryError> {
        self.fail()
    }
}

pub fn app_with<R>(repo: Arc<R>) -> Router
where
    R: StockQueryRepositoryTrait + StockCommandRepositoryTrait + Send + Sync + 'static,
{
    let mut registry = Registry::default();
    let di_container = DependenciesInject::from_repositories(repo.clone(), repo, &mut registry);
    AppRouter::build(Arc::new(AppState::with_container(di_container, registry)))
}

pub fn app() -> Router {
    app_with(Arc::new(InMemoryStockRepository::default()))
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let content_type = body.map(|_| "application/json");
    send_with_content_type(app, method, uri, content_type, body).await
}

pub async fn send_with_content_type(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string());
    let (status, bytes) = send_raw(app, method, uri, body.as_deref()).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
