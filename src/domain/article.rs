use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub source: String,
    pub url: String,
    #[serde(deserialize_with = "super::timestamp::utc_or_default")]
    pub published: DateTime<Utc>,
}

impl Article {
    pub fn new(title: impl Into<String>, published: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            published,
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// First `max_chars` characters of the content, respecting char boundaries
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.content.chars().take(max_chars).collect()
    }
}
