// AI tools: caption, content idea, ad title and bio suggestions.
// Remote calls go through llm_client; template output needs no network.

pub mod generator;
pub mod handlers;
pub mod parse;
pub mod prompts;
pub mod templates;
pub mod translate;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use generator::GenerationHandler;

/// Upper bound on suggestions returned per request.
pub const MAX_SUGGESTIONS: usize = 5;

/// The family of text being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Caption,
    Idea,
    AdTitle,
    Bio,
}

impl ToolType {
    pub const ALL: [ToolType; 4] = [
        ToolType::Caption,
        ToolType::Idea,
        ToolType::AdTitle,
        ToolType::Bio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Caption => "caption",
            ToolType::Idea => "idea",
            ToolType::AdTitle => "ad_title",
            ToolType::Bio => "bio",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body as it arrives on the wire. Every field is optional here so
/// that missing fields become validation errors rather than parse errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationInput {
    #[serde(rename = "type")]
    pub tool_type: Option<String>,
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

/// A validated generation request.
///
/// `platform`, `tone` and `language` are passed through verbatim and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub tool_type: ToolType,
    pub topic: String,
    pub platform: String,
    pub tone: String,
    pub language: String,
}

impl GenerationRequest {
    /// Checks the mandatory fields. A blank topic is reported before any
    /// problem with `type`.
    pub fn validate(input: GenerationInput) -> Result<Self, ValidationError> {
        // Blankness is judged on the trimmed text; the topic itself is used as sent.
        let topic = input
            .topic
            .filter(|t| !t.trim().is_empty())
            .ok_or(ValidationError::MissingTopic)?;

        let raw_type = input
            .tool_type
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingType)?;
        let tool_type =
            ToolType::parse(&raw_type).ok_or(ValidationError::InvalidType(raw_type))?;

        Ok(GenerationRequest {
            tool_type,
            topic,
            platform: input.platform.unwrap_or_default(),
            tone: input.tone.unwrap_or_default(),
            language: input.language.unwrap_or_default(),
        })
    }

    /// Placeholder values for `template::fill`.
    pub(crate) fn placeholders(&self) -> [(&'static str, &str); 4] {
        [
            ("topic", self.topic.as_str()),
            ("platform", self.platform.as_str()),
            ("tone", self.tone.as_str()),
            ("language", self.language.as_str()),
        ]
    }
}

/// Ordered suggestions, at most [`MAX_SUGGESTIONS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: type and topic")]
    MissingType,

    #[error("Invalid type. Must be caption, idea, ad_title, or bio")]
    InvalidType(String),

    #[error("Missing required fields: type and topic")]
    MissingTopic,
}
