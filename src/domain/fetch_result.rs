use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::Article;

/// The document written by the fetch stage and read by the summarize stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    #[serde(default, deserialize_with = "super::timestamp::local_or_default")]
    pub fetched_at: DateTime<Local>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl FetchResult {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            fetched_at: Local::now(),
            count: articles.len(),
            articles,
        }
    }

    /// Documents read from disk are not validated, so the two can disagree
    pub fn count_matches(&self) -> bool {
        self.count == self.articles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_count_derived_from_articles() {
        let articles = vec![
            Article::new("One", Utc::now()),
            Article::new("Two", Utc::now()),
        ];

        let result = FetchResult::new(articles);
        assert_eq!(result.count, 2);
        assert!(result.count_matches());
    }

    #[test]
    fn test_permissive_read_of_empty_document() {
        let result: FetchResult = serde_json::from_str("{}").unwrap();

        assert_eq!(result.count, 0);
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_mismatched_count_is_read_as_is() {
        let json = r#"{
            "fetched_at": "2025-12-12T09:00:00+00:00",
            "count": 5,
            "articles": [{"title": "Lonely"}]
        }"#;

        let result: FetchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.count, 5);
        assert_eq!(result.articles.len(), 1);
        assert!(!result.count_matches());
    }
}
