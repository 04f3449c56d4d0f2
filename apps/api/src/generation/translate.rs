//! Word-swap "translation" of template output into English.
//!
//! This is an approximation, not a translator: a short fixed table of
//! Indonesian words is swapped for English equivalents and everything else
//! is left alone. Only template output goes through it; remote providers are
//! asked for the target language directly.
//!
//! Matching is whole-word and case-sensitive (`Gaya` is not `gaya`). All
//! words are replaced in a single pass, so no replacement is ever re-matched
//! and the table order does not matter.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// The secondary output language. Any other value keeps the Indonesian text.
pub const SECONDARY_LANGUAGE: &str = "English";

const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("untuk", "for"),
    ("yang", "that"),
    ("dengan", "with"),
    ("banget", "really"),
    ("Ketika", "When"),
    ("Ini dia", "Here is"),
    ("pemula", "beginners"),
    ("gaya", "style"),
];

fn substitution_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = SUBSTITUTIONS
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{alternation})\b")).expect("substitution pattern is valid")
    })
}

/// Applies the substitution table to `text`.
pub fn approximate_english(text: &str) -> String {
    substitution_pattern()
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == matched)
                .map(|(_, to)| *to)
                .unwrap_or(matched)
                .to_string()
        })
        .into_owned()
}
