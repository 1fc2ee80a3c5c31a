use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::Mode;

/// Opaque summary text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub summarized_at: DateTime<Local>,
    pub articles_count: usize,
    pub summary_length: usize,
    /// Mode requested by configuration
    pub mode: Mode,
    /// Mode of the path that produced the summary
    pub effective_mode: Mode,
}

impl SummaryMetadata {
    pub fn new(summary: &Summary, articles_count: usize, mode: Mode, effective_mode: Mode) -> Self {
        Self {
            summarized_at: Local::now(),
            articles_count,
            summary_length: summary.char_count(),
            mode,
            effective_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_counts_characters() {
        let summary = Summary::new("📰 news");
        assert_eq!(summary.char_count(), 6);
        assert_eq!(summary.as_str().len(), 9);
    }

    #[test]
    fn test_metadata_records_requested_and_effective_mode() {
        let summary = Summary::new("abc");
        let metadata = SummaryMetadata::new(&summary, 3, Mode::Live, Mode::Mock);

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["articles_count"], 3);
        assert_eq!(json["summary_length"], 3);
        assert_eq!(json["mode"], "real");
        assert_eq!(json["effective_mode"], "mock");
    }
}
