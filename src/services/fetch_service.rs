use crate::config::{Config, NEWS_API_KEY};
use crate::domain::{Article, Fallback, Mode, Sourced};
use crate::errors::{DigestError, DigestResult};
use crate::sources::{ArticleSource, MockSource, NewsApiSource};

pub struct FetchService<L: ArticleSource> {
    requested: Mode,
    live: Option<L>,
    mock: MockSource,
}

impl FetchService<NewsApiSource> {
    pub fn from_config(config: &Config) -> Self {
        let live = config.news_api_key.as_deref().map(NewsApiSource::new);
        Self::new(config.mode, live)
    }
}

impl<L: ArticleSource> FetchService<L> {
    pub fn new(requested: Mode, live: Option<L>) -> Self {
        Self {
            requested,
            live,
            mock: MockSource::new(),
        }
    }

    /// Fetch articles from the requested source, falling back to mock data
    /// when the live source has no credential or is not implemented.
    pub fn fetch(&self) -> DigestResult<Sourced<Vec<Article>>> {
        let live = match (self.requested, &self.live) {
            (Mode::Mock, _) => return Ok(Sourced::mock(self.mock.fetch_articles()?)),
            (Mode::Live, None) => {
                return self.fall_back(Fallback::MissingCredential(NEWS_API_KEY));
            }
            (Mode::Live, Some(live)) => live,
        };

        match live.fetch_articles() {
            Ok(articles) if articles.is_empty() => {
                Err(DigestError::Live("source returned no articles".to_string()))
            }
            Ok(articles) => Ok(Sourced {
                value: articles,
                mode: live.mode(),
                fallback: None,
            }),
            Err(DigestError::NotImplemented(what)) => {
                self.fall_back(Fallback::NotImplemented(what))
            }
            Err(e) => Err(e),
        }
    }

    fn fall_back(&self, reason: Fallback) -> DigestResult<Sourced<Vec<Article>>> {
        tracing::info!(%reason, "falling back to mock articles");
        Ok(Sourced::fell_back(self.mock.fetch_articles()?, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::traits::MockArticleSource;
    use chrono::Utc;

    #[test]
    fn test_mock_mode_never_touches_live_source() {
        let mut live = MockArticleSource::new();
        live.expect_fetch_articles().never();

        let service = FetchService::new(Mode::Mock, Some(live));
        let sourced = service.fetch().unwrap();

        assert_eq!(sourced.mode, Mode::Mock);
        assert!(sourced.fallback.is_none());
        assert_eq!(sourced.value.len(), 3);
    }

    #[test]
    fn test_live_without_credential_falls_back() {
        let service: FetchService<MockArticleSource> = FetchService::new(Mode::Live, None);
        let sourced = service.fetch().unwrap();

        assert_eq!(sourced.mode, Mode::Mock);
        assert_eq!(
            sourced.fallback,
            Some(Fallback::MissingCredential("NEWS_API_KEY"))
        );
        assert_eq!(sourced.value, MockSource::articles());
    }

    #[test]
    fn test_unimplemented_live_source_falls_back() {
        let config = Config {
            mode: Mode::Live,
            news_api_key: Some("key".to_string()),
            ai_api_key: None,
            output_dir: "output".into(),
        };

        let sourced = FetchService::from_config(&config).fetch().unwrap();

        assert_eq!(sourced.mode, Mode::Mock);
        assert_eq!(
            sourced.fallback,
            Some(Fallback::NotImplemented("Real API".to_string()))
        );
    }

    #[test]
    fn test_live_articles_are_tagged_live() {
        let mut live = MockArticleSource::new();
        live.expect_fetch_articles()
            .times(1)
            .returning(|| Ok(vec![Article::new("Live story", Utc::now())]));
        live.expect_mode().return_const(Mode::Live);

        let sourced = FetchService::new(Mode::Live, Some(live)).fetch().unwrap();

        assert_eq!(sourced.mode, Mode::Live);
        assert!(sourced.fallback.is_none());
        assert_eq!(sourced.value[0].title, "Live story");
    }

    #[test]
    fn test_other_live_errors_propagate() {
        let mut live = MockArticleSource::new();
        live.expect_fetch_articles()
            .returning(|| Err(DigestError::Live("connection refused".to_string())));

        let result = FetchService::new(Mode::Live, Some(live)).fetch();
        assert!(matches!(result, Err(DigestError::Live(_))));
    }

    #[test]
    fn test_empty_live_result_is_an_error() {
        let mut live = MockArticleSource::new();
        live.expect_fetch_articles().returning(|| Ok(Vec::new()));

        let result = FetchService::new(Mode::Live, Some(live)).fetch();
        assert!(matches!(result, Err(DigestError::Live(_))));
    }
}
