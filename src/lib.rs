//! Two-stage news pipeline.
//!
//! `fetch-news` writes a fixed set of articles to `output/news_raw.json`;
//! `summarize-news` reads that file and writes `output/summary.txt` and
//! `output/metadata.json`. Both stages run in mock mode unless `DEMO_MOCK`
//! is set to something other than `true`, and fall back to mock mode when the
//! live integration is unavailable.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod services;
pub mod sources;
pub mod storage;
pub mod summarizers;
