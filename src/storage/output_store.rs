use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{FetchResult, Summary, SummaryMetadata};
use crate::errors::{DigestError, DigestResult};

pub const RAW_FILE: &str = "news_raw.json";
pub const SUMMARY_FILE: &str = "summary.txt";
pub const METADATA_FILE: &str = "metadata.json";

/// The output directory shared by both stages.
///
/// Writes are plain overwrites: no temp files, no locking.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn raw_path(&self) -> PathBuf {
        self.dir.join(RAW_FILE)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(SUMMARY_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }

    pub fn has_raw(&self) -> bool {
        self.raw_path().is_file()
    }

    pub fn write_fetch_result(&self, result: &FetchResult) -> DigestResult<PathBuf> {
        self.write_json(self.raw_path(), result)
    }

    /// Read the fetch stage's document. A missing file is `MissingInput`.
    pub fn read_fetch_result(&self) -> DigestResult<FetchResult> {
        let path = self.raw_path();
        if !self.has_raw() {
            return Err(DigestError::MissingInput(path));
        }

        let content = fs::read_to_string(&path)?;
        let result: FetchResult = serde_json::from_str(&content)?;

        if !result.count_matches() {
            tracing::warn!(
                path = %path.display(),
                count = result.count,
                articles = result.articles.len(),
                "count does not match number of articles"
            );
        }

        Ok(result)
    }

    pub fn write_summary(&self, summary: &Summary) -> DigestResult<PathBuf> {
        let path = self.summary_path();
        self.ensure_dir()?;
        fs::write(&path, summary.as_str())?;
        tracing::info!(path = %path.display(), "wrote summary");
        Ok(path)
    }

    pub fn write_metadata(&self, metadata: &SummaryMetadata) -> DigestResult<PathBuf> {
        self.write_json(self.metadata_path(), metadata)
    }

    fn ensure_dir(&self) -> DigestResult<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, path: PathBuf, value: &T) -> DigestResult<PathBuf> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "wrote JSON document");
        Ok(path)
    }
}
