// Cross-cutting prompt fragments shared by both providers.
// Per-tool instructions live in generation::prompts.

/// System prompt sent with every generation call.
pub const CREATOR_SYSTEM: &str = "You are a creative content writer helping content creators. \
    Return only the list of suggestions, numbered 1-5.";

/// Appended to every per-tool instruction so the numbered-line parser can
/// pick the results out of the answer.
pub const NUMBERED_LIST_INSTRUCTION: &str =
    "Return exactly 5 results as a numbered list (1. to 5.), one per line, with no other text.";
