//! Game configuration.
//!
//! The table size is fixed at compile time (`PLAYERS`); everything here is a
//! per-run knob: the seed, how many rounds to play and where output goes.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::NUM_ROUNDS;
use crate::error::AppError;

pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Line format of the game log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable `PLAYER 1: draws 5` lines
    #[default]
    Text,
    /// One JSON object per event
    Jsonl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the shared generator; `None` picks one at random.
    pub seed: Option<u64>,
    pub rounds: usize,
    /// Game log destination; `None` disables the file log.
    pub log_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Render the table to stdout after every draw.
    pub console: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: NUM_ROUNDS,
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            log_format: LogFormat::Text,
            console: true,
        }
    }
}

impl GameConfig {
    /// Configuration for a game with no file log and no console output.
    pub fn headless(seed: Option<u64>) -> Self {
        Self {
            seed,
            log_path: None,
            console: false,
            ..Self::default()
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.rounds == 0 {
            return Err(AppError::config("rounds must be at least 1"));
        }
        Ok(())
    }
}
