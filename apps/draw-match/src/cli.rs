//! Command-line surface of the `draw-match` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{GameConfig, LogFormat, DEFAULT_LOG_PATH};
use crate::domain::NUM_ROUNDS;

#[derive(Debug, Parser)]
#[command(name = "draw-match")]
#[command(about = "Three players draw from a shared pile until someone matches their hand")]
pub struct Cli {
    /// Seed for shuffles and coin tosses (random when omitted)
    pub seed: Option<u64>,

    /// Number of rounds to play
    #[arg(long, default_value_t = NUM_ROUNDS as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Game log file, truncated at start
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Game log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Do not render the table to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            rounds: self.rounds as usize,
            log_path: Some(self.log_file),
            log_format: self.log_format,
            console: !self.quiet,
        }
    }

    /// Diagnostics filter used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
