use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ArticleId;
use crate::errors::{FetcherError, FetcherResult};

pub const DEFAULT_BASE_URL: &str = "https://api.figshare.com/v2/articles/";

/// Name of the download directory created next to the executable
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "database";

pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Figshare articles holding the model test datasets, in download order
pub const DEFAULT_ARTICLE_IDS: &[&str] = &[
    "11394819", "11394816", "11394804", "11394801", "11394792", "11394786", "11394783",
    "11394780", "11394768", "11394765", "11394657",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub article_ids: Vec<ArticleId>,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Load `.env` files so their values are visible to the CLI parser.
    /// Must run before `Cli::parse()`.
    pub fn load_dotenv() {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();
    }

    pub fn default_output_dir() -> PathBuf {
        Self::exe_dir()
            .map(|d| d.join(DEFAULT_OUTPUT_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR_NAME))
    }

    pub fn default_article_ids() -> Vec<ArticleId> {
        DEFAULT_ARTICLE_IDS
            .iter()
            .map(|id| ArticleId::new(*id))
            .collect()
    }

    /// Build a config from optional overrides, filling the rest with defaults
    pub fn from_overrides(
        base_url: Option<String>,
        article_ids: Option<String>,
        output_dir: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> FetcherResult<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)
            .map_err(|e| FetcherError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let article_ids = match article_ids {
            Some(list) => ArticleId::parse_list(&list)?,
            None => Self::default_article_ids(),
        };

        let timeout_secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(FetcherError::Config(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            article_ids,
            output_dir: output_dir.unwrap_or_else(Self::default_output_dir),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
