use crate::{
    abstract_trait::stock::{
        repository::DynStockQueryRepository, service::StockQueryServiceTrait,
    },
    domain::response::StockResponse,
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct StockQueryService {
    pub query: DynStockQueryRepository,
    pub metrics: Metrics,
}

impl StockQueryService {
    pub fn new(query: DynStockQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "stock_query_service");

        Self { query, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("stock-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl StockQueryServiceTrait for StockQueryService {
    async fn find_all(&self) -> Result<Vec<StockResponse>, ServiceError> {
        info!("🔍 Finding all stocks");

        let tracing_ctx = self.start_tracing(
            "stock_find_all",
            vec![
                KeyValue::new("component", "stock"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        match self.query.find_all().await {
            Ok(stocks) => {
                let count = stocks.len();
                let data: Vec<StockResponse> =
                    stocks.into_iter().map(StockResponse::from).collect();

                self.complete_tracing(
                    &tracing_ctx,
                    Method::Get,
                    true,
                    &format!("Retrieved {count} stocks"),
                );
                Ok(data)
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Get,
                    false,
                    &format!("Failed to retrieve stocks: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StockResponse>, ServiceError> {
        info!("🆔 Finding stock by ID: {id}");

        let tracing_ctx = self.start_tracing(
            "stock_find_by_id",
            vec![
                KeyValue::new("component", "stock"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("stock.id", id),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(stock)) => {
                self.complete_tracing(&tracing_ctx, Method::Get, true, "Stock retrieved");
                Ok(Some(StockResponse::from(stock)))
            }
            Ok(None) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Get,
                    true,
                    &format!("No stock with ID {id}"),
                );
                Ok(None)
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Get,
                    false,
                    &format!("Failed to retrieve stock {id}: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
