pub mod display;

use clap::Parser;

/// Fetch news articles and write them to the output directory.
///
/// Behavior is controlled by environment: DEMO_MOCK (default "true"),
/// NEWS_API_KEY and NEWS_OUTPUT_DIR.
#[derive(Parser)]
#[command(name = "fetch-news")]
#[command(version)]
pub struct FetchCli {}

/// Summarize the fetched articles and write summary and metadata files.
///
/// Behavior is controlled by environment: DEMO_MOCK (default "true"),
/// GOOGLE_AI_API_KEY or OPENAI_API_KEY, and NEWS_OUTPUT_DIR.
#[derive(Parser)]
#[command(name = "summarize-news")]
#[command(version)]
pub struct SummarizeCli {}
