//! Local template strategy: five fixed templates per tool type.
//!
//! Output is a pure function of the request. Placeholders: `{topic}`,
//! `{tone}`, `{platform}`.

use crate::generation::translate::{approximate_english, SECONDARY_LANGUAGE};
use crate::generation::{GenerationRequest, ToolType};
use crate::template::fill;

const CAPTION_TEMPLATES: [&str; 5] = [
    "{topic} - {tone} vibes untuk {platform}! 🔥",
    "Ketika {topic} meets {tone} energy di {platform} 💫",
    "{topic} yang {tone} banget! Perfect untuk {platform} 🎯",
    "Ini dia {topic} dengan twist {tone}! {platform} edition ✨",
    "{topic}: {tone} style untuk audience {platform} kamu 🚀",
];

const IDEA_TEMPLATES: [&str; 5] = [
    "Tutorial {topic} untuk pemula di {platform} dengan gaya {tone}",
    "Behind the scenes: Proses {topic} yang {tone} dan engaging",
    "Top 5 tips {topic} yang wajib dicoba ({tone} version)",
    "{topic} challenge: Konten {tone} yang bikin viral di {platform}",
    "Review honest: {topic} dengan pendekatan {tone} yang relatable",
];

const AD_TITLE_TEMPLATES: [&str; 5] = [
    "🔥 {topic} - Penawaran {tone} yang Nggak Boleh Dilewatkan!",
    "⚡ Rahasia {topic} yang {tone} dan Terbukti Efektif",
    "💎 {topic}: {tone} Solution untuk Masalah Kamu",
    "🎯 Kenapa {topic} ini {tone} banget? Cek Sekarang!",
    "✨ {topic} - {tone} Way untuk Hasil Maksimal",
];

const BIO_TEMPLATES: [&str; 5] = [
    "👋 {topic} Enthusiast | Sharing tips {tone} setiap hari ✨ | Klik link di bawah 👇",
    "🚀 Helping you with {topic} | {tone} Vibes Only ✨ | DM for collab 📩",
    "✨ All things {topic} | {tone} Life | Join our community 👇",
    "🎓 Belajar {topic} bareng aku! | Gaya {tone} & Seru | Follow for more ⚡",
    "💡 {topic} Expert | {tone} approach to life | Business Inquiries 📧",
];

fn templates_for(tool_type: ToolType) -> &'static [&'static str; 5] {
    match tool_type {
        ToolType::Caption => &CAPTION_TEMPLATES,
        ToolType::Idea => &IDEA_TEMPLATES,
        ToolType::AdTitle => &AD_TITLE_TEMPLATES,
        ToolType::Bio => &BIO_TEMPLATES,
    }
}

/// Renders the five suggestions for `request`, swapping in English words
/// when the secondary language is requested.
pub fn render(request: &GenerationRequest) -> Vec<String> {
    let values = request.placeholders();
    let english = request.language == SECONDARY_LANGUAGE;

    templates_for(request.tool_type)
        .iter()
        .map(|template| {
            let text = fill(template, &values);
            if english {
                approximate_english(&text)
            } else {
                text
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::MAX_SUGGESTIONS;

    fn request(tool_type: ToolType, language: &str) -> GenerationRequest {
        GenerationRequest {
            tool_type,
            topic: "tips diet sehat".to_string(),
            platform: "Instagram".to_string(),
            tone: "Santai".to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_caption_example_contains_topic() {
        let suggestions = render(&request(ToolType::Caption, "Bahasa Indonesia"));
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        for s in &suggestions {
            assert!(s.contains("tips diet sehat"), "missing topic in {s:?}");
        }
        assert_eq!(suggestions[0], "tips diet sehat - Santai vibes untuk Instagram! 🔥");
    }

    #[test]
    fn test_every_type_yields_five() {
        for tool_type in ToolType::ALL {
            for language in ["Bahasa Indonesia", "English", ""] {
                assert_eq!(render(&request(tool_type, language)).len(), MAX_SUGGESTIONS);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for tool_type in ToolType::ALL {
            let r = request(tool_type, "English");
            assert_eq!(render(&r), render(&r));
        }
    }

    #[test]
    fn test_english_applies_substitutions() {
        let suggestions = render(&request(ToolType::Caption, "English"));
        assert_eq!(suggestions[0], "tips diet sehat - Santai vibes for Instagram! 🔥");
        assert_eq!(
            suggestions[1],
            "When tips diet sehat meets Santai energy di Instagram 💫"
        );
        assert_eq!(
            suggestions[3],
            "Here is tips diet sehat with twist Santai! Instagram edition ✨"
        );
    }

    #[test]
    fn test_idea_english() {
        let suggestions = render(&request(ToolType::Idea, "English"));
        assert_eq!(
            suggestions[0],
            "Tutorial tips diet sehat for beginners di Instagram with style Santai"
        );
    }

    #[test]
    fn test_empty_optional_fields_do_not_break_rendering() {
        let r = GenerationRequest {
            tool_type: ToolType::Bio,
            topic: "kopi".to_string(),
            platform: String::new(),
            tone: String::new(),
            language: String::new(),
        };
        let suggestions = render(&r);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.contains("kopi")));
    }
}
