//! Axum route handlers for the AI tools API.

use anyhow::Context;
use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::{GenerationInput, GenerationResult, ToolType};
use crate::state::AppState;

/// POST /api/ai
///
/// Body: `{ type, topic, platform, tone, language }`.
/// Returns `{ suggestions: [..] }` with up to five entries. Only validation
/// problems (400) and unreadable bodies (500) are errors; provider trouble
/// degrades to template output.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>, AppError> {
    // Parsed by hand so a missing content-type or bad JSON is a 500, not
    // axum's default rejection.
    let input: GenerationInput =
        serde_json::from_slice(&body).context("Failed to parse generation request body")?;

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "ai_generate",
        %request_id,
        tool_type = input.tool_type.as_deref().unwrap_or(""),
        strategy = state.generator.strategy_name(),
    );

    let result = state.generator.handle(input).instrument(span).await?;

    Ok(Json(result))
}

/// GET /api/ai
///
/// Static description of the endpoint.
pub async fn handle_info() -> Json<Value> {
    let types: Vec<&str> = ToolType::ALL.iter().map(ToolType::as_str).collect();
    Json(json!({
        "message": "AI Tools API",
        "usage": "POST to this endpoint with type, topic, platform, tone, and language",
        "types": types,
    }))
}
