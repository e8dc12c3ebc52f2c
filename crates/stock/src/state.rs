use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Builds the PostgreSQL-backed state and starts the system metrics collector.
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(pool, &mut registry);

        let state = Self::with_container(di_container, registry);
        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));
        state
    }

    pub fn with_container(di_container: DependenciesInject, mut registry: Registry) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
        }
    }
}
