pub mod traits;
pub mod mock;
pub mod llm;

pub use traits::Summarizer;
pub use mock::{CannedSummarizer, MOCK_SUMMARY};
pub use llm::LlmSummarizer;
