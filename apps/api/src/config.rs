use std::fmt;

use anyhow::{Context, Result};
use tracing::warn;

/// Application configuration loaded from environment variables.
/// `.env` is loaded by `main` before this runs.
/// Nothing is required; every variable has a default.
/// Log filtering is read by the subscriber directly from `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            provider: ProviderConfig::from_env(),
        })
    }
}

/// Which text-generation backend serves `/api/ai`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Mock,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    /// Parses an `AI_PROVIDER` value. Unknown values fall back to `Mock`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "mock" => ProviderKind::Mock,
            "openai" => ProviderKind::OpenAi,
            "gemini" => ProviderKind::Gemini,
            other => {
                warn!("Unknown AI_PROVIDER '{other}', using mock templates");
                ProviderKind::Mock
            }
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Mock => "mock",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        };
        f.write_str(name)
    }
}

/// Provider selection plus credential, built once at startup and handed to
/// the generation handler.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    /// Overrides the provider's public endpoint (gateways, tests).
    pub base_url: Option<String>,
}

// Hand-written so the credential never reaches the logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("AI_PROVIDER")
                .map(|v| ProviderKind::parse(&v))
                .unwrap_or(ProviderKind::Mock),
            api_key: optional_env("AI_API_KEY"),
            base_url: optional_env("AI_BASE_URL"),
        }
    }

    /// The provider that will actually be used: a remote provider without a
    /// credential behaves exactly like `Mock`.
    pub fn effective_provider(&self) -> ProviderKind {
        match (self.provider, &self.api_key) {
            (ProviderKind::Mock, _) | (_, None) => ProviderKind::Mock,
            (kind, Some(_)) => kind,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!(ProviderKind::parse("openai"), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::parse(" Gemini "), ProviderKind::Gemini);
        assert_eq!(ProviderKind::parse("mock"), ProviderKind::Mock);
        assert_eq!(ProviderKind::parse(""), ProviderKind::Mock);
        assert_eq!(ProviderKind::parse("claude"), ProviderKind::Mock);
    }

    #[test]
    fn test_remote_provider_without_key_is_mock() {
        let config = ProviderConfig {
            provider: ProviderKind::OpenAi,
            api_key: None,
            base_url: None,
        };
        assert_eq!(config.effective_provider(), ProviderKind::Mock);
    }

    #[test]
    fn test_remote_provider_with_key() {
        let config = ProviderConfig {
            provider: ProviderKind::Gemini,
            api_key: Some("k".to_string()),
            base_url: None,
        };
        assert_eq!(config.effective_provider(), ProviderKind::Gemini);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig {
            provider: ProviderKind::OpenAi,
            api_key: Some("sk-secret".to_string()),
            base_url: None,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("PORT", "9090");
        std::env::set_var("AI_PROVIDER", "Gemini");
        std::env::set_var("AI_API_KEY", "  ");

        let config = Config::from_env().unwrap();

        std::env::remove_var("PORT");
        std::env::remove_var("AI_PROVIDER");
        std::env::remove_var("AI_API_KEY");

        assert_eq!(config.port, 9090);
        assert_eq!(config.provider.provider, ProviderKind::Gemini);
        assert_eq!(config.provider.api_key, None);
        assert_eq!(config.provider.effective_provider(), ProviderKind::Mock);
    }
}
