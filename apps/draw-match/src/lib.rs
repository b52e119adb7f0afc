#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod game_flow;
pub mod panic_hook;
pub mod protocol;
pub mod rng;
pub mod sinks;

#[cfg(test)]
mod test_doubles;

// Re-exports for public API
pub use config::{GameConfig, LogFormat};
pub use domain::{Card, GameEvent, NUM_ROUNDS, PLAYERS};
pub use error::AppError;
pub use game_flow::{build_game, Game, GameBuilder, GameSummary, RoundSummary, SharedGame};
pub use rng::{Randomness, SeededRng};
pub use sinks::{EventLog, MemoryLog, NullLog, NullView, TableView, WriterLog};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
