//! Axum route handlers for the calculator tools.

use axum::{body::Bytes, Json};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;
use crate::tools::analytics::{analyze, AnalyticsInput, AnalyticsReport, EngagementCounts};
use crate::tools::script::{
    write_script, ContentType, ScriptInput, DEFAULT_DURATION_MINUTES, DEFAULT_TONE,
};

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// Decodes a JSON body so that bad input gets the usual `{ "error": .. }`
/// 400 instead of axum's plain-text rejection.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

/// POST /api/tools/analytics
///
/// `views` and `likes` are required; `comments` and `shares` default to 0.
pub async fn handle_analytics(body: Bytes) -> Result<Json<AnalyticsReport>, AppError> {
    let input: AnalyticsInput = parse_body(&body)?;
    let (Some(views), Some(likes)) = (input.views, input.likes) else {
        return Err(AppError::Validation(
            "views and likes are required".to_string(),
        ));
    };

    let counts = EngagementCounts {
        views,
        likes,
        comments: input.comments,
        shares: input.shares,
    };

    Ok(Json(analyze(&input.platform, counts)))
}

/// POST /api/tools/script
pub async fn handle_script(body: Bytes) -> Result<Json<ScriptResponse>, AppError> {
    let input: ScriptInput = parse_body(&body)?;
    let topic = input.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let content_type = ContentType::parse(&input.content_type).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid content_type '{}'. Must be video, shorts, podcast, or livestream",
            input.content_type
        ))
    })?;

    let script = write_script(
        content_type,
        topic,
        input.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
        input.tone.as_deref().unwrap_or(DEFAULT_TONE),
    );

    Ok(Json(ScriptResponse { script }))
}
