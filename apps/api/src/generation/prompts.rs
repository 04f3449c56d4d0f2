// Per-tool instructions for the remote providers.
// Placeholders: {topic}, {platform}, {tone}, {language}.

use crate::generation::{GenerationRequest, ToolType};
use crate::llm_client::prompts::NUMBERED_LIST_INSTRUCTION;
use crate::template::fill;

pub const CAPTION_PROMPT_TEMPLATE: &str = "Generate 5 engaging social media captions for {platform} \
    about \"{topic}\" with a {tone} tone in {language}. \
    Make them creative and attention-grabbing.";

pub const IDEA_PROMPT_TEMPLATE: &str = "Generate 5 creative content ideas for {platform} \
    about \"{topic}\" with a {tone} tone in {language}. \
    Focus on ideas that would engage viewers.";

pub const AD_TITLE_PROMPT_TEMPLATE: &str = "Generate 5 compelling advertising titles/hooks for {platform} \
    about \"{topic}\" with a {tone} tone in {language}. \
    Make them click-worthy and persuasive.";

pub const BIO_PROMPT_TEMPLATE: &str = "Generate 5 professional and engaging social media bios for {platform} \
    about \"{topic}\" with a {tone} tone in {language}. \
    Use emojis and make them structured.";

/// Builds the user prompt for `request`, ending with the numbered-list
/// instruction.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let template = match request.tool_type {
        ToolType::Caption => CAPTION_PROMPT_TEMPLATE,
        ToolType::Idea => IDEA_PROMPT_TEMPLATE,
        ToolType::AdTitle => AD_TITLE_PROMPT_TEMPLATE,
        ToolType::Bio => BIO_PROMPT_TEMPLATE,
    };
    format!(
        "{} {}",
        fill(template, &request.placeholders()),
        NUMBERED_LIST_INSTRUCTION
    )
}
