use std::path::PathBuf;

use clap::Parser;

/// With no arguments, downloads every configured article into `database/`
/// next to the executable.
#[derive(Parser, Debug)]
#[command(name = "datafetch")]
#[command(about = "Download the Figshare datasets used to test the models")]
#[command(version)]
pub struct Cli {
    /// Directory the files are saved into (created if missing)
    #[arg(short, long, env = "DATAFETCH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the article metadata API
    #[arg(long, env = "DATAFETCH_BASE_URL")]
    pub base_url: Option<String>,

    /// Comma separated article IDs to download instead of the built-in list
    #[arg(long, env = "DATAFETCH_ARTICLE_IDS")]
    pub article_ids: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "DATAFETCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Dry run - list the files each article holds without downloading them
    #[arg(long)]
    pub dry_run: bool,
}
