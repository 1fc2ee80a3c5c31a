pub mod output_store;

pub use output_store::{OutputStore, METADATA_FILE, RAW_FILE, SUMMARY_FILE};
