//! Script writer: fills a fixed outline for the chosen content format.
//!
//! Placeholders: `{topic}`, `{duration}`, `{tone_phrase}`, `{hashtag}`.
//! Casual tone (any letter case) picks the informal phrasing.

use serde::Deserialize;

use crate::template::fill;

pub const DEFAULT_DURATION_MINUTES: u32 = 5;
pub const DEFAULT_TONE: &str = "casual";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Video,
    Shorts,
    Podcast,
    Livestream,
}

impl ContentType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "video" => Some(ContentType::Video),
            "shorts" => Some(ContentType::Shorts),
            "podcast" => Some(ContentType::Podcast),
            "livestream" => Some(ContentType::Livestream),
            _ => None,
        }
    }

    fn template(&self) -> &'static str {
        match self {
            ContentType::Video => VIDEO_TEMPLATE,
            ContentType::Shorts => SHORTS_TEMPLATE,
            ContentType::Podcast => PODCAST_TEMPLATE,
            ContentType::Livestream => LIVESTREAM_TEMPLATE,
        }
    }

    /// (casual, other) phrasing for `{tone_phrase}`.
    fn tone_phrases(&self) -> (&'static str, &'static str) {
        match self {
            ContentType::Video => ("pengen tau lebih dalam", "ingin memahami secara mendalam"),
            ContentType::Shorts => ("Gampang banget kok!", "Sangat mudah dipahami!"),
            ContentType::Podcast => ("", ""),
            ContentType::Livestream => ("lagi belajar", "sedang mempelajari"),
        }
    }
}

const VIDEO_TEMPLATE: &str = r#"[INTRO - 0:00]
Halo semuanya! Selamat datang kembali di channel saya.
Hari ini kita akan bahas tentang "{topic}".
Video ini penting banget buat kalian yang {tone_phrase}.

[OPENING HOOK - 0:15]
Tahukah kalian bahwa {topic} ini sangat berpengaruh di era digital seperti sekarang?
Yuk kita bahas satu-satu!

[MAIN CONTENT - 0:45]
Pertama, kita mulai dari dasar dulu...
[Jelaskan poin utama 1]

Kedua, hal penting yang perlu kalian tau adalah...
[Jelaskan poin utama 2]

Ketiga, tips praktis yang bisa langsung kalian terapkan...
[Jelaskan poin utama 3]

[CALL TO ACTION - {duration}:00]
Nah, itu dia pembahasan tentang {topic}.
Jangan lupa LIKE, COMMENT, dan SUBSCRIBE ya!
Kalau ada pertanyaan, tulis di kolom komentar.
Sampai jumpa di video berikutnya!

[OUTRO]
*End screen dengan video rekomendasi*"#;

const SHORTS_TEMPLATE: &str = r#"[HOOK - 0:01]
Nih rahasia {topic}! 👇

[MAIN POINT - 0:03]
{tone_phrase}
1. [Poin 1]
2. [Poin 2]
3. [Poin 3]

[CTA - 0:25]
Save dulu biar ga lupa!
Follow untuk tips lainnya 🔥

#{hashtag} #ContentCreator"#;

const PODCAST_TEMPLATE: &str = r#"[INTRO MUSIC - 0:00]

[OPENING - 0:30]
Host: Halo listeners! Welcome back to [Nama Podcast].
Hari ini kita akan deep dive ke topik yang menarik: "{topic}".

[PERSONAL CONNECTION - 1:00]
Kalian pernah ngerasain ga...
[Cerita relatable tentang topik]

[MAIN DISCUSSION - 2:00]
Mari kita breakdown topik ini dari berbagai sudut pandang:

Point 1: [Pembahasan mendalam]
Point 2: [Analisis detail]
Point 3: [Perspektif berbeda]

[Q&A / DISCUSSION - {duration}:00]
Nah, menarik kan?
[Pertanyaan reflektif untuk audience]

[CLOSING - {duration}:30]
Thanks for listening!
Jangan lupa subscribe dan kasih review ya.
See you next episode!

[OUTRO MUSIC]"#;

const LIVESTREAM_TEMPLATE: &str = r#"[PRE-STREAM SETUP]
- Test audio dan video
- Siapkan backdrop / lighting
- Buka moderator chat

[OPENING - 0:00]
Halo semuanya! Apa kabar?
Drop "HADIR" di chat ya!

[INTRODUCTION - 1:00]
Oke, hari ini kita akan bahas tentang "{topic}".
Livestream ini akan berguna banget buat kalian yang {tone_phrase} hal ini.

[MAIN CONTENT - 5:00]
Langsung aja ya, kita mulai dari:
- Point 1: [Penjelasan + demo]
- Point 2: [Contoh real]
- Point 3: [Tips praktis]

[Q&A SESSION - {duration}:00]
Sekarang waktunya Q&A!
Drop pertanyaan kalian di chat.

[CLOSING - {duration}:30]
Thank you semuanya yang udah join!
Nantiin livestream selanjutnya ya.
Jangan lupa subscribe!"#;

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptInput {
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub topic: String,
    pub duration: Option<u32>,
    pub tone: Option<String>,
}

fn default_content_type() -> String {
    "video".to_string()
}

/// Fills the outline for `content_type`. `topic` is expected to be non-blank.
pub fn write_script(content_type: ContentType, topic: &str, duration: u32, tone: &str) -> String {
    let (casual, other) = content_type.tone_phrases();
    let tone_phrase = if tone.trim().eq_ignore_ascii_case(DEFAULT_TONE) {
        casual
    } else {
        other
    };
    let duration = duration.to_string();
    let hashtag: String = topic.split_whitespace().collect();

    fill(
        content_type.template(),
        &[
            ("topic", topic),
            ("duration", duration.as_str()),
            ("tone_phrase", tone_phrase),
            ("hashtag", hashtag.as_str()),
        ],
    )
}
