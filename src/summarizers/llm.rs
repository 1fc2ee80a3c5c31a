use crate::domain::{Article, Mode, Summary};
use crate::errors::{DigestError, DigestResult};
use crate::summarizers::traits::Summarizer;

const PROMPT_HEADER: &str = "Summarize these news articles in 3 concise bullet points:";

/// Generative-model summarizer. Builds its prompt; the model call is not built.
pub struct LlmSummarizer {
    api_key: String,
}

impl LlmSummarizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Prompt sent to the model: a header followed by one block per article
    pub fn build_prompt(articles: &[Article]) -> String {
        let articles_text = articles
            .iter()
            .map(|a| format!("Title: {}\nContent: {}", a.title, a.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{}\n\n{}", PROMPT_HEADER, articles_text)
    }
}

impl Summarizer for LlmSummarizer {
    fn mode(&self) -> Mode {
        Mode::Live
    }

    fn summarize(&self, articles: &[Article]) -> DigestResult<Summary> {
        let prompt = Self::build_prompt(articles);
        tracing::debug!(
            key_len = self.api_key.len(),
            prompt_chars = prompt.chars().count(),
            "built summarization prompt"
        );

        Err(DigestError::NotImplemented("Real AI".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_build_prompt() {
        let articles = vec![
            Article::new("First", Utc::now()).with_content("Alpha"),
            Article::new("Second", Utc::now()).with_content("Beta"),
        ];

        let prompt = LlmSummarizer::build_prompt(&articles);
        assert_eq!(
            prompt,
            "Summarize these news articles in 3 concise bullet points:\n\n\
             Title: First\nContent: Alpha\n\n\
             Title: Second\nContent: Beta"
        );
    }

    #[test]
    fn test_reports_not_implemented() {
        let summarizer = LlmSummarizer::new("key");

        assert_eq!(summarizer.mode(), Mode::Live);
        assert!(matches!(
            summarizer.summarize(&[]),
            Err(DigestError::NotImplemented(_))
        ));
    }
}
