//! Command-line argument parsing for the replay tool

use clap::Parser;
use std::path::PathBuf;

/// Replay a gesture script against a sliding panel
#[derive(Parser, Debug)]
#[command(
    name = "panel-replay",
    version,
    about = "Replay a YAML gesture script against a sliding panel"
)]
pub struct CliArgs {
    /// YAML list of panel messages
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Panel config (defaults to ~/.config/sliding-panel/panel.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per step instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write debug logs to the logs directory
    #[arg(long)]
    pub log_file: bool,

    /// Drive settles with synthetic ticks every MS milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_ms: Option<u64>,
}
