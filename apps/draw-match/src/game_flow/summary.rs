//! Per-game results reported by the dealer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: usize,
    pub starting_seat: usize,
    pub winner: Option<usize>,
    /// Draws taken during the round, the winning one included.
    pub turns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Seed that reproduces this game, when the generator has one.
    pub seed: Option<u64>,
    pub rounds: Vec<RoundSummary>,
}

impl GameSummary {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            rounds: Vec::new(),
        }
    }

    /// Rounds won by each seat.
    pub fn wins_by_seat(&self) -> [usize; crate::domain::PLAYERS] {
        let mut wins = [0; crate::domain::PLAYERS];
        for winner in self.rounds.iter().filter_map(|r| r.winner) {
            wins[winner] += 1;
        }
        wins
    }

    pub fn total_turns(&self) -> usize {
        self.rounds.iter().map(|r| r.turns).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(round: usize, winner: usize, turns: usize) -> RoundSummary {
        RoundSummary {
            round,
            starting_seat: (round - 1) % 3,
            winner: Some(winner),
            turns,
        }
    }

    #[test]
    fn aggregates_wins_and_turns() {
        let summary = GameSummary {
            seed: Some(1),
            rounds: vec![round(1, 2, 10), round(2, 2, 4), round(3, 0, 7)],
        };
        assert_eq!(summary.wins_by_seat(), [1, 0, 2]);
        assert_eq!(summary.total_turns(), 21);
    }

    #[test]
    fn serializes_rounds() {
        let summary = GameSummary {
            seed: None,
            rounds: vec![round(1, 1, 3)],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["seed"].is_null());
        assert_eq!(json["rounds"][0]["winner"], 1);
        assert_eq!(json["rounds"][0]["starting_seat"], 0);
    }
}
