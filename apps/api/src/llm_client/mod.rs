//! LLM client: every outbound call to an external text-generation service
//! goes through this module.
//!
//! Two interchangeable providers implement [`TextProvider`]: OpenAI chat
//! completions and Google Gemini. Each call is a single attempt. Callers
//! decide what to do on failure; nothing here retries or backs off.
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod gemini;
pub mod openai;
pub mod prompts;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

// The request URL can carry the credential (Gemini's `?key=`), so it is
// dropped before the error is stored or logged.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err.without_url())
    }
}

/// A remote text-generation backend.
///
/// Carried by the generation handler as `Arc<dyn TextProvider>`.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Sends one prompt and returns the provider's free-text answer.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;
}

// Both providers answer errors as `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ProviderErrorEnvelope {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Builds an `Api` error from a non-success response, preferring the
/// provider's own message when the body parses.
fn api_error(status: reqwest::StatusCode, body: String) -> ProviderError {
    let message = serde_json::from_str::<ProviderErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Joins a base URL and an absolute path without doubling the slash.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
