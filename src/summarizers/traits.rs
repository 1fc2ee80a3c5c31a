use crate::domain::{Article, Mode, Summary};
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait Summarizer: Send + Sync {
    /// Mode this summarizer runs in
    fn mode(&self) -> Mode;

    /// Produce a summary of the given articles
    fn summarize(&self, articles: &[Article]) -> DigestResult<Summary>;
}
