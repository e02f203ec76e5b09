use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::OptimiseService;

/// Shared application state injected into all route handlers via Axum
/// extractors. The optimisation service is a trait object so tests can
/// substitute a fake remote service.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn OptimiseService>,
    pub config: Config,
}
