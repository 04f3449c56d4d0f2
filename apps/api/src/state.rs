use std::sync::Arc;

use crate::config::Config;
use crate::generation::GenerationHandler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once from `config.provider`; the strategy does not change while
    /// the process runs.
    pub generator: Arc<GenerationHandler>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(GenerationHandler::new(&config.provider));
        Self { config, generator }
    }
}
