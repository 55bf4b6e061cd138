//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "bookvault",
    version,
    about = "A terminal administration console for the BookVault library catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base address of the catalog backend.
    #[arg(long, value_name = "URL", env = "BOOKVAULT_API_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Route to open at start-up (`/`, `/books`, `/authors`, ...).
    #[arg(short, long, value_name = "PATH")]
    pub route: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Show key hints in the status bar.
    #[arg(long)]
    pub show_key_hints: Option<bool>,
}
