use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{api_error, endpoint, ProviderError, TextProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Google Gemini `generateContent` client. The credential travels as the
/// `key` query parameter.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn generate_path() -> String {
        format!("/v1/models/{MODEL}:generateContent")
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    // Gemini v1 has no system role; the system text is prepended to the prompt.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let text = format!("{system}\n\n{prompt}");
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &text }],
            }],
        };

        let response = self
            .client
            .post(endpoint(&self.base_url, &Self::generate_path()))
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyContent)?;

        debug!("Gemini call succeeded: {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_complete_returns_first_candidate_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", GeminiClient::generate_path().as_str())
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{ "content": { "parts": [{ "text": "1) Satu\n2) Dua" }] } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GeminiClient::new("test-key".to_string(), Some(server.url()));
        let text = client.complete("system", "prompt").await.unwrap();

        assert_eq!(text, "1) Satu\n2) Dua");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_non_success_is_api_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", GeminiClient::generate_path().as_str())
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::new("bad-key".to_string(), Some(server.url()));
        let err = client.complete("system", "prompt").await.unwrap_err();

        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", GeminiClient::generate_path().as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = GeminiClient::new("test-key".to_string(), Some(server.url()));
        let err = client.complete("system", "prompt").await.unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_error_does_not_expose_key() {
        // Port 1 is never listening locally; the connect is refused.
        let client = GeminiClient::new(
            "SUPER-SECRET-KEY".to_string(),
            Some("http://127.0.0.1:1".to_string()),
        );
        let err = client.complete("system", "prompt").await.unwrap_err();

        assert!(matches!(err, ProviderError::Http(_)));
        let rendered = format!("{err} {err:?}");
        assert!(!rendered.contains("SUPER-SECRET-KEY"), "key in error: {rendered}");
    }

    #[tokio::test]
    async fn test_complete_without_candidates_is_empty_content() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", GeminiClient::generate_path().as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = GeminiClient::new("test-key".to_string(), Some(server.url()));
        let err = client.complete("system", "prompt").await.unwrap_err();

        assert!(matches!(err, ProviderError::EmptyContent));
    }
}
