//! Dealer coordinator: shuffles, deals, opens each round and ends the game.

use std::sync::Arc;

use tracing::{debug, info};

use super::{GameSummary, RoundSummary, SharedGame};
use crate::domain::{starting_seat_for_round, GameEvent, PLAYERS};
use crate::protocol::Aborted;

pub struct Dealer {
    shared: Arc<SharedGame>,
    rounds: usize,
    seed: Option<u64>,
}

impl Dealer {
    pub fn new(shared: Arc<SharedGame>, rounds: usize, seed: Option<u64>) -> Self {
        Self {
            shared,
            rounds,
            seed,
        }
    }

    /// Thread body: run every round, then release the players.
    pub fn run(self) -> Result<GameSummary, Aborted> {
        let mut summary = GameSummary::new(self.seed);

        for round in 0..self.rounds {
            self.shared.barrier.await_all_ready()?;
            self.shared.table.assert_conserved();
            self.shuffle_and_deal(round);

            let starting_seat = starting_seat_for_round(round);
            self.shared.token.reset();
            self.shared.barrier.open_round();
            debug!(round = round + 1, starting_seat, "round open");
            self.shared.token.grant(starting_seat);

            let winner = self.shared.barrier.await_round_close()?;
            let turns = self.shared.take_turn_count();
            info!(round = round + 1, ?winner, turns, "round closed");
            summary.rounds.push(RoundSummary {
                round: round + 1,
                starting_seat,
                winner,
                turns,
            });
        }

        self.shared.barrier.await_all_ready()?;
        self.shared.table.assert_conserved();
        self.shared.record(GameEvent::GameEnd {
            rounds: self.rounds,
        });
        self.shared.barrier.finish();
        self.shared.token.release_all();
        debug!("players released");

        Ok(summary)
    }

    fn shuffle_and_deal(&self, round: usize) {
        self.shared.round_banner(round + 1, self.rounds);
        self.shared.record(GameEvent::Shuffle {
            round: round + 1,
            rounds: self.rounds,
        });
        self.shared.shuffle_pile();

        for seat in 0..PLAYERS {
            let card = self.shared.table.draw();
            self.shared.table.deal(seat, card);
            self.shared.record(GameEvent::Deal { seat, card });
        }
    }
}
