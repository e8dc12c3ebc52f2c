use crate::{
    abstract_trait::stock::{
        repository::{DynStockCommandRepository, DynStockQueryRepository},
        service::{DynStockCommandService, DynStockQueryService},
    },
    repository::{StockCommandRepository, StockQueryRepository},
    service::{StockCommandService, StockQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub stock_query: DynStockQueryService,
    pub stock_command: DynStockCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("stock_query", &"StockQueryService")
            .field("stock_command", &"StockCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let stock_query_repo =
            Arc::new(StockQueryRepository::new(pool.clone())) as DynStockQueryRepository;
        let stock_command_repo =
            Arc::new(StockCommandRepository::new(pool)) as DynStockCommandRepository;

        Self::from_repositories(stock_query_repo, stock_command_repo, registry)
    }

    /// Wires the services over any repository implementation.
    pub fn from_repositories(
        query_repo: DynStockQueryRepository,
        command_repo: DynStockCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let stock_query =
            Arc::new(StockQueryService::new(query_repo, registry)) as DynStockQueryService;
        let stock_command =
            Arc::new(StockCommandService::new(command_repo, registry)) as DynStockCommandService;

        Self {
            stock_query,
            stock_command,
        }
    }
}
