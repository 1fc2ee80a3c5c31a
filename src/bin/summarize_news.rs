use std::process;

use anyhow::Context;
use clap::Parser;

use news_digest::cli::{display, SummarizeCli};
use news_digest::config::Config;
use news_digest::domain::SummaryMetadata;
use news_digest::errors::DigestError;
use news_digest::logging;
use news_digest::services::SummarizeService;
use news_digest::storage::OutputStore;

fn main() {
    let _ = SummarizeCli::parse();
    logging::init();

    if let Err(e) = run() {
        match e.downcast_ref::<DigestError>() {
            Some(DigestError::MissingInput(path)) => {
                eprintln!("Error: Input file not found: {}", path.display());
                eprintln!("   Run fetch-news first!");
            }
            // Full chain, plus a backtrace when RUST_BACKTRACE is set
            _ => eprintln!("\nError: {:?}", e),
        }
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    println!("\n{}\n", display::banner("AI News Summarizer"));

    let config = Config::from_env()?;
    let store = OutputStore::new(&config.output_dir);

    let data = store
        .read_fetch_result()
        .with_context(|| format!("reading {}", store.raw_path().display()))?;
    let articles = data.articles;
    println!("Loaded {} articles", articles.len());

    println!("\nGenerating summary...");
    let service = SummarizeService::from_config(&config);
    let sourced = service.summarize(&articles).context("summarizing articles")?;
    for line in display::mode_report(config.mode, sourced.fallback.as_ref(), "summary") {
        println!("{}", line);
    }
    let summary = sourced.value;

    let summary_path = store
        .write_summary(&summary)
        .with_context(|| format!("writing {}", store.summary_path().display()))?;
    println!("\nSummary saved to {}", summary_path.display());

    println!("\n{}", display::banner("SUMMARY"));
    println!("{}", summary);
    println!("{}\n", display::rule());

    let metadata = SummaryMetadata::new(
        &summary,
        articles.len(),
        service.requested_mode(),
        sourced.mode,
    );
    let metadata_path = store
        .write_metadata(&metadata)
        .with_context(|| format!("writing {}", store.metadata_path().display()))?;
    println!("Metadata saved to {}", metadata_path.display());

    println!("Summarization completed successfully\n");

    Ok(())
}
