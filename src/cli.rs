use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "finserve", version, about = "Market indices and stock analysis in the terminal")]
pub struct Cli {
    /// JSON file overriding the index and ticker lists
    #[arg(long, env = "FINSERVE_CONFIG")]
    pub config: Option<String>,

    /// Directory receiving `{ticker}_stock_data.csv` exports
    #[arg(long, env = "FINSERVE_EXPORT_DIR", default_value = ".")]
    pub export_dir: String,

    #[arg(long, env = "FINSERVE_LOG_DIR", default_value = "~/.finserve/logs")]
    pub log_dir: String,

    /// Ticker preloaded into the Stock Analysis form
    #[arg(long, env = "FINSERVE_TICKER")]
    pub ticker: Option<String>,
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
