use crate::{
    abstract_trait::stock::{
        repository::DynStockCommandRepository, service::StockCommandServiceTrait,
    },
    domain::{
        requests::{CreateStockRequest, UpdateStockRequest},
        response::StockMessageResponse,
    },
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
pub struct StockCommandService {
    pub command: DynStockCommandRepository,
    pub metrics: Metrics,
}

impl StockCommandService {
    pub fn new(command: DynStockCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "stock_command_service");

        Self { command, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("stock-command-service")
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
impl StockCommandServiceTrait for StockCommandService {
    async fn create_stock(
        &self,
        req: &CreateStockRequest,
    ) -> Result<StockMessageResponse, ServiceError> {
        info!("🏗️ Creating stock: {}", req.name);

        let tracing_ctx = self.start_tracing(
            "stock_create",
            vec![
                KeyValue::new("component", "stock"),
                KeyValue::new("operation", "create"),
                KeyValue::new("stock.name", req.name.clone()),
            ],
        );

        match self.command.create_stock(req).await {
            Ok(id) => {
                let response = StockMessageResponse::created(id);
                self.complete_tracing(&tracing_ctx, Method::Post, true, &response.message);
                Ok(response)
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Post,
                    false,
                    &format!("Failed to create stock: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn update_stock(
        &self,
        req: &UpdateStockRequest,
    ) -> Result<StockMessageResponse, ServiceError> {
        info!("🔄 Updating stock ID: {}", req.id);

        let tracing_ctx = self.start_tracing(
            "stock_update",
            vec![
                KeyValue::new("component", "stock"),
                KeyValue::new("operation", "update"),
                KeyValue::new("stock.id", req.id),
            ],
        );

        match self.command.update_stock(req).await {
            Ok(rows_affected) => {
                let response = StockMessageResponse::updated(req.id, rows_affected);
                self.complete_tracing(&tracing_ctx, Method::Put, true, &response.message);
                Ok(response)
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Put,
                    false,
                    &format!("Failed to update stock {}: {err}", req.id),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_stock(&self, id: i64) -> Result<StockMessageResponse, ServiceError> {
        info!("🗑️ Deleting stock ID: {id}");

        let tracing_ctx = self.start_tracing(
            "stock_delete",
            vec![
                KeyValue::new("component", "stock"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("stock.id", id),
            ],
        );

        match self.command.delete_stock(id).await {
            Ok(rows_affected) => {
                let response = StockMessageResponse::deleted(id, rows_affected);
                self.complete_tracing(&tracing_ctx, Method::Delete, true, &response.message);
                Ok(response)
            }
            Err(err) => {
                self.complete_tracing(
                    &tracing_ctx,
                    Method::Delete,
                    false,
                    &format!("Failed to delete stock {id}: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
