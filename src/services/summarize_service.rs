use crate::config::Config;
use crate::domain::{Article, Fallback, Mode, Sourced, Summary};
use crate::errors::{DigestError, DigestResult};
use crate::summarizers::{CannedSummarizer, LlmSummarizer, Summarizer};

const AI_KEY_NAMES: &str = "GOOGLE_AI_API_KEY/OPENAI_API_KEY";

pub struct SummarizeService<S: Summarizer> {
    requested: Mode,
    live: Option<S>,
    mock: CannedSummarizer,
}

impl SummarizeService<LlmSummarizer> {
    pub fn from_config(config: &Config) -> Self {
        let live = config.ai_api_key.as_deref().map(LlmSummarizer::new);
        Self::new(config.mode, live)
    }
}

impl<S: Summarizer> SummarizeService<S> {
    pub fn new(requested: Mode, live: Option<S>) -> Self {
        Self {
            requested,
            live,
            mock: CannedSummarizer::new(),
        }
    }

    pub fn requested_mode(&self) -> Mode {
        self.requested
    }

    /// Summarize with the requested summarizer, falling back to the mock one
    /// when no model credential is set or the model call is not implemented.
    pub fn summarize(&self, articles: &[Article]) -> DigestResult<Sourced<Summary>> {
        let live = match (self.requested, &self.live) {
            (Mode::Mock, _) => return Ok(Sourced::mock(self.mock.summarize(articles)?)),
            (Mode::Live, None) => {
                return self.fall_back(articles, Fallback::MissingCredential(AI_KEY_NAMES));
            }
            (Mode::Live, Some(live)) => live,
        };

        match live.summarize(articles) {
            Ok(summary) => Ok(Sourced {
                value: summary,
                mode: live.mode(),
                fallback: None,
            }),
            Err(DigestError::NotImplemented(what)) => {
                self.fall_back(articles, Fallback::NotImplemented(what))
            }
            Err(e) => Err(e),
        }
    }

    fn fall_back(&self, articles: &[Article], reason: Fallback) -> DigestResult<Sourced<Summary>> {
        tracing::info!(%reason, "falling back to mock summary");
        Ok(Sourced::fell_back(self.mock.summarize(articles)?, reason))
    }
}
