pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as ai;
use crate::state::AppState;
use crate::tools::handlers as tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI tools
        .route("/api/ai", post(ai::handle_generate).get(ai::handle_info))
        // Calculators
        .route("/api/tools/analytics", post(tools::handle_analytics))
        .route("/api/tools/script", post(tools::handle_script))
        .with_state(state)
}
