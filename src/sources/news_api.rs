use crate::domain::{Article, Mode};
use crate::errors::{DigestError, DigestResult};
use crate::sources::traits::ArticleSource;

/// Live news source. Holds the credential; the integration itself is not built.
pub struct NewsApiSource {
    api_key: String,
}

impl NewsApiSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl ArticleSource for NewsApiSource {
    fn mode(&self) -> Mode {
        Mode::Live
    }

    fn fetch_articles(&self) -> DigestResult<Vec<Article>> {
        tracing::debug!(key_len = self.api_key.len(), "news API credential present");
        Err(DigestError::NotImplemented("Real API".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_not_implemented() {
        let source = NewsApiSource::new("secret");

        assert_eq!(source.mode(), Mode::Live);
        assert!(matches!(
            source.fetch_articles(),
            Err(DigestError::NotImplemented(_))
        ));
    }
}
