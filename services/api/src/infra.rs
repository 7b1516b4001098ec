use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tier_routing::error::AppError;
use tier_routing::routing::{TierConfiguration, TierConfigurationStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_store(table: TierConfiguration) -> Result<Arc<TierConfigurationStore>, AppError> {
    Ok(Arc::new(TierConfigurationStore::new(table)?))
}
