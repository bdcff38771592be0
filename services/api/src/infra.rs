use metrics_exporter_prometheus::PrometheusHandle;
use skill_dispatch::dispatch::{DispatchService, MicroLpSolver, Roster};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Dispatch service over the standard roster, solved with `microlp`.
pub(crate) fn standard_dispatch_service() -> Arc<DispatchService<MicroLpSolver>> {
    Arc::new(DispatchService::new(
        Roster::standard(),
        Arc::new(MicroLpSolver),
    ))
}
