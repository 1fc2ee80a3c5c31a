pub mod article;
pub mod fetch_result;
pub mod mode;
pub mod summary;
pub mod timestamp;

pub use article::Article;
pub use fetch_result::FetchResult;
pub use mode::{Fallback, Mode, Sourced};
pub use summary::{Summary, SummaryMetadata};
