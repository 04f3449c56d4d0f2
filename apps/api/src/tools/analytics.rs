//! Analytics checker: engagement estimate and recommendations for one post.
//!
//! Engagement is (likes + comments + shares) / views × 100. Reach, conversion
//! and average watch time are rough multipliers over the same inputs, not
//! measured values.

use serde::{Deserialize, Serialize};

const REACH_MULTIPLIER: f64 = 1.5;
const CONVERSION_FACTOR: f64 = 0.3;
/// Estimated watch minutes per 100 views.
const WATCH_MINUTES_PER_100_VIEWS: f64 = 2.5;

/// Below this engagement rate (%) a post is considered weak.
const LOW_ENGAGEMENT: f64 = 2.0;
/// At or above this engagement rate (%) a post is considered excellent.
const HIGH_ENGAGEMENT: f64 = 5.0;
/// Comments expected per like before prompting for more discussion.
const COMMENT_RATIO: f64 = 0.1;
/// Shares expected per like before prompting for more shareable content.
const SHARE_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsInput {
    #[serde(default)]
    pub platform: String,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementCounts {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub platform: String,
    /// Engagement rate in percent, two decimals.
    pub engagement: f64,
    pub reach: u64,
    /// Estimated conversion rate in percent, two decimals.
    pub conversion: f64,
    /// Estimated total watch time in minutes.
    pub avg_watch_time: u64,
    pub recommendations: Vec<String>,
}

/// Computes the report. `views == 0` yields a zero engagement rate.
pub fn analyze(platform: &str, counts: EngagementCounts) -> AnalyticsReport {
    let views = counts.views as f64;
    let likes = counts.likes as f64;
    let interactions = counts
        .likes
        .saturating_add(counts.comments)
        .saturating_add(counts.shares) as f64;

    let rate = if counts.views > 0 {
        interactions / views * 100.0
    } else {
        0.0
    };

    AnalyticsReport {
        platform: platform.to_string(),
        engagement: round2(rate),
        reach: (views * REACH_MULTIPLIER).round() as u64,
        conversion: round2(rate * CONVERSION_FACTOR),
        avg_watch_time: (views / 100.0 * WATCH_MINUTES_PER_100_VIEWS).round() as u64,
        recommendations: recommendations(rate, likes, counts),
    }
}

fn recommendations(rate: f64, likes: f64, counts: EngagementCounts) -> Vec<String> {
    let mut out: Vec<&str> = if rate < LOW_ENGAGEMENT {
        vec![
            "⚠️ Engagement rate rendah - Tingkatkan interaksi dengan audience",
            "💡 Tambahkan CTA yang lebih kuat di konten",
            "📢 Gunakan pertanyaan di caption untuk memicu komentar",
        ]
    } else if rate < HIGH_ENGAGEMENT {
        vec![
            "✅ Engagement rate cukup baik",
            "💡 Posting di waktu prime time untuk reach lebih luas",
            "🎯 Eksperimen dengan format konten berbeda",
        ]
    } else {
        vec![
            "🔥 Engagement rate excellent!",
            "💪 Pertahankan konsistensi posting",
            "📈 Konten ini bisa dijadikan template untuk konten selanjutnya",
        ]
    };

    if (counts.comments as f64) < likes * COMMENT_RATIO {
        out.push("💬 Tingkatkan komentar dengan mengajukan pertanyaan");
    }
    if (counts.shares as f64) < likes * SHARE_RATIO {
        out.push("🔄 Buat konten yang lebih shareable (tips, quotes, infografis)");
    }

    out.into_iter().map(String::from).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(views: u64, likes: u64, comments: u64, shares: u64) -> EngagementCounts {
        EngagementCounts {
            views,
            likes,
            comments,
            shares,
        }
    }

    #[test]
    fn test_low_engagement_report() {
        let report = analyze("YouTube", counts(10_000, 100, 5, 1));

        assert_eq!(report.engagement, 1.06);
        assert_eq!(report.reach, 15_000);
        assert_eq!(report.conversion, 0.32);
        assert_eq!(report.avg_watch_time, 250);
        assert_eq!(report.recommendations.len(), 5);
        assert!(report.recommendations[0].contains("rendah"));
        assert!(report.recommendations[3].contains("komentar"));
        assert!(report.recommendations[4].contains("shareable"));
    }

    #[test]
    fn test_medium_engagement_with_healthy_ratios() {
        let report = analyze("Instagram", counts(1_000, 25, 5, 2));

        assert_eq!(report.engagement, 3.2);
        assert_eq!(report.recommendations.len(), 3);
        assert!(report.recommendations[0].contains("cukup baik"));
    }

    #[test]
    fn test_high_engagement() {
        let report = analyze("TikTok", counts(100, 10, 1, 1));

        assert_eq!(report.engagement, 12.0);
        assert_eq!(report.recommendations[0], "🔥 Engagement rate excellent!");
    }

    #[test]
    fn test_zero_views() {
        let report = analyze("Facebook", counts(0, 0, 0, 0));

        assert_eq!(report.engagement, 0.0);
        assert_eq!(report.reach, 0);
        assert_eq!(report.conversion, 0.0);
        assert_eq!(report.avg_watch_time, 0);
        // 0 < 0 is false, so no ratio prompts
        assert_eq!(report.recommendations.len(), 3);
    }
}
