use crate::domain::{Article, Mode};
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait ArticleSource: Send + Sync {
    /// Mode this source runs in
    fn mode(&self) -> Mode;

    /// Fetch the current set of articles
    fn fetch_articles(&self) -> DigestResult<Vec<Article>>;
}
