//! Generation handler: validate, pick a strategy, degrade on provider failure.
//!
//! Flow: validate → remote provider (if configured) → parse numbered list.
//! Any provider failure is logged and replaced by the template output for
//! the same request, so a valid request never fails.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{ProviderConfig, ProviderKind};
use crate::generation::parse::parse_numbered_list;
use crate::generation::prompts::build_prompt;
use crate::generation::templates;
use crate::generation::{GenerationInput, GenerationRequest, GenerationResult, ValidationError};
use crate::llm_client::prompts::CREATOR_SYSTEM;
use crate::llm_client::{GeminiClient, OpenAiClient, ProviderError, TextProvider};

/// Serves `/api/ai`. The strategy is fixed at construction; `None` means
/// template output only.
#[derive(Clone)]
pub struct GenerationHandler {
    provider: Option<Arc<dyn TextProvider>>,
}

impl GenerationHandler {
    pub fn new(config: &ProviderConfig) -> Self {
        match (config.effective_provider(), config.api_key.as_ref()) {
            (ProviderKind::OpenAi, Some(key)) => Self::with_provider(Arc::new(OpenAiClient::new(
                key.clone(),
                config.base_url.clone(),
            ))),
            (ProviderKind::Gemini, Some(key)) => Self::with_provider(Arc::new(GeminiClient::new(
                key.clone(),
                config.base_url.clone(),
            ))),
            _ => {
                if config.provider != ProviderKind::Mock {
                    warn!(
                        "AI_PROVIDER={} is set but AI_API_KEY is missing; using templates",
                        config.provider
                    );
                }
                Self::templates_only()
            }
        }
    }

    pub fn with_provider(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn templates_only() -> Self {
        Self { provider: None }
    }

    /// Name of the strategy tried first.
    pub fn strategy_name(&self) -> &'static str {
        self.provider.as_ref().map_or("mock", |p| p.name())
    }

    /// Validates `input` and generates suggestions for it.
    pub async fn handle(&self, input: GenerationInput) -> Result<GenerationResult, ValidationError> {
        let request = GenerationRequest::validate(input)?;
        Ok(self.generate(&request).await)
    }

    /// Generates suggestions for a validated request. Never fails.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let suggestions = match &self.provider {
            None => templates::render(request),
            Some(provider) => match generate_remote(provider.as_ref(), request).await {
                Ok(suggestions) => {
                    info!(
                        provider = provider.name(),
                        count = suggestions.len(),
                        "Remote generation succeeded"
                    );
                    suggestions
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "Remote generation failed, falling back to templates"
                    );
                    templates::render(request)
                }
            },
        };

        GenerationResult { suggestions }
    }
}

/// One provider call, no retries.
async fn generate_remote(
    provider: &dyn TextProvider,
    request: &GenerationRequest,
) -> Result<Vec<String>, ProviderError> {
    let prompt = build_prompt(request);
    let text = provider.complete(CREATOR_SYSTEM, &prompt).await?;
    Ok(parse_numbered_list(&text))
}
