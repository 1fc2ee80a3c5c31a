pub mod fetch_service;
pub mod summarize_service;

pub use fetch_service::FetchService;
pub use summarize_service::SummarizeService;
