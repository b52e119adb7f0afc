//! Headless game runs for batch statistics.

use std::time::Instant;

use draw_match::{build_game, AppError, GameConfig, GameSummary};
use serde::Serialize;

/// One simulated game, as written to the JSONL output.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game: u32,
    pub seed: u64,
    pub duration_ms: f64,
    pub summary: GameSummary,
}

pub struct Simulator {
    rounds: usize,
}

impl Simulator {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    /// Play one game without console or file output.
    pub fn simulate_game(&self, game: u32, seed: u64) -> Result<GameRecord, AppError> {
        let start = Instant::now();
        let summary = build_game(GameConfig::headless(Some(seed)).with_rounds(self.rounds))
            .build()?
            .play()?;
        Ok(GameRecord {
            game,
            seed,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
            summary,
        })
    }
}

/// Seed for game `game` (1-based): consecutive from `base` when given,
/// otherwise fresh per game.
pub fn game_seed(base: Option<u64>, game: u32) -> u64 {
    match base {
        Some(base) => base.wrapping_add(u64::from(game.saturating_sub(1))),
        None => rand::random(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_follow_the_base() {
        assert_eq!(game_seed(Some(10), 1), 10);
        assert_eq!(game_seed(Some(10), 3), 12);
        assert_eq!(game_seed(Some(u64::MAX), 2), 0);
    }

    #[test]
    fn simulated_games_replay_from_their_seed() {
        let simulator = Simulator::new(2);
        let first = simulator.simulate_game(1, 77).unwrap();
        let second = simulator.simulate_game(2, 77).unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.summary.seed, Some(77));
        assert_eq!(first.summary.rounds.len(), 2);
    }
}
