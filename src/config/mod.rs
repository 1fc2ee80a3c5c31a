use std::path::PathBuf;

use crate::domain::Mode;
use crate::errors::{DigestError, DigestResult};

pub const NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const AI_API_KEYS: [&str; 2] = ["GOOGLE_AI_API_KEY", "OPENAI_API_KEY"];

const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub news_api_key: Option<String>,
    pub ai_api_key: Option<String>,
    pub output_dir: PathBuf,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Anything other than "true" requests live mode
        let mode = match lookup("DEMO_MOCK") {
            Some(value) if !value.eq_ignore_ascii_case("true") => Mode::Live,
            _ => Mode::Mock,
        };

        let credential = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let news_api_key = credential(NEWS_API_KEY);
        let ai_api_key = AI_API_KEYS.iter().find_map(|key| credential(*key));

        let output_dir = match lookup("NEWS_OUTPUT_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(DigestError::Config(
                    "NEWS_OUTPUT_DIR must not be empty".to_string(),
                ))
            }
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };

        Ok(Self {
            mode,
            news_api_key,
            ai_api_key,
            output_dir,
        })
    }
}
