use std::process;

use anyhow::Context;
use clap::Parser;

use news_digest::cli::{display, FetchCli};
use news_digest::config::Config;
use news_digest::domain::FetchResult;
use news_digest::logging;
use news_digest::services::FetchService;
use news_digest::storage::OutputStore;

fn main() {
    let _ = FetchCli::parse();
    logging::init();

    if let Err(e) = run() {
        eprintln!("\nError: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    println!("\n{}\n", display::banner("News Fetcher"));

    let config = Config::from_env()?;
    let service = FetchService::from_config(&config);

    let sourced = service.fetch().context("fetching articles")?;
    for line in display::mode_report(config.mode, sourced.fallback.as_ref(), "data") {
        println!("{}", line);
    }

    let result = FetchResult::new(sourced.value);
    println!("\nFetched {} articles", result.count);

    let store = OutputStore::new(&config.output_dir);
    let path = store
        .write_fetch_result(&result)
        .with_context(|| format!("writing {}", store.raw_path().display()))?;
    println!("Saved to {}", path.display());

    println!("\nPreview:");
    for (i, article) in result.articles.iter().enumerate() {
        println!("\n{}", display::preview(i + 1, article));
    }

    println!("\n{}\n", display::banner("Fetch completed successfully"));

    Ok(())
}
