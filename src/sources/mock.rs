use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Article, Mode};
use crate::errors::DigestResult;
use crate::sources::traits::ArticleSource;

/// Deterministic offline source. Always returns the same three articles.
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }

    fn published(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 12, hour, min, 0)
            .single()
            .unwrap_or_default()
    }

    pub fn articles() -> Vec<Article> {
        vec![
            Article::new(
                "AI Breakthrough in Natural Language Processing",
                Self::published(8, 0),
            )
            .with_content(
                "Researchers announce significant improvements in language models, \
                 demonstrating better understanding of context and nuance in human communication.",
            )
            .with_source("Tech News Daily")
            .with_url("https://example.com/ai-breakthrough"),
            Article::new(
                "Climate Summit Reaches Historic Agreement",
                Self::published(7, 30),
            )
            .with_content(
                "World leaders agree on new carbon reduction targets, committing to \
                 net-zero emissions by 2050 with concrete action plans.",
            )
            .with_source("Global Times")
            .with_url("https://example.com/climate-summit"),
            Article::new("Space Mission Successfully Launches", Self::published(6, 45))
                .with_content(
                    "New satellite deployed for Earth observation, expected to provide \
                     unprecedented data on climate patterns and environmental changes.",
                )
                .with_source("Space Journal")
                .with_url("https://example.com/space-launch"),
        ]
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleSource for MockSource {
    fn mode(&self) -> Mode {
        Mode::Mock
    }

    fn fetch_articles(&self) -> DigestResult<Vec<Article>> {
        Ok(Self::articles())
    }
}
