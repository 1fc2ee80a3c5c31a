pub mod traits;
pub mod mock;
pub mod news_api;

pub use traits::ArticleSource;
pub use mock::MockSource;
pub use news_api::NewsApiSource;
