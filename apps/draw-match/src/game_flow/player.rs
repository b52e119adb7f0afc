//! Player agent: one thread per seat.

use std::sync::Arc;

use tracing::{debug, info, trace};

use super::SharedGame;
use crate::domain::{next_seat, GameEvent};
use crate::protocol::{Aborted, RoundSignal};
use crate::sinks::TableSnapshot;

/// How a single in-round turn ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Drawn card matched the hand. The round is over and the token stays put.
    Won,
    /// Heads: the drawn card went back to the pile.
    KeptHeld,
    /// Tails: the held card went back to the pile and the drawn card was kept.
    KeptDrawn,
}

pub struct Player {
    seat: usize,
    next: usize,
    shared: Arc<SharedGame>,
}

impl Player {
    pub fn new(seat: usize, shared: Arc<SharedGame>) -> Self {
        Self {
            seat,
            next: next_seat(seat),
            shared,
        }
    }

    /// Thread body: play rounds until the dealer finishes the game.
    pub fn run(self) -> Result<(), Aborted> {
        debug!(seat = self.seat, "player seated");
        let mut seen = 0;
        loop {
            self.shared.barrier.signal_ready(self.seat);
            match self.shared.barrier.await_round_open(seen)? {
                RoundSignal::Opened(generation) => {
                    seen = generation;
                    self.play_round()?;
                }
                RoundSignal::Finished => break,
            }
        }
        self.leave()
    }

    fn play_round(&self) -> Result<(), Aborted> {
        loop {
            self.shared.token.await_turn(self.seat)?;
            if !self.shared.barrier.is_live() {
                self.clean_up();
                return Ok(());
            }
            let outcome = self.take_turn();
            trace!(seat = self.seat, ?outcome, "turn taken");
        }
    }

    /// One draw while holding the token in a live round.
    ///
    /// On a win the round is closed and the token is kept; otherwise the
    /// token moves to the next seat.
    pub fn take_turn(&self) -> TurnOutcome {
        let seat = self.seat;
        let table = &self.shared.table;
        let held = table
            .hand(seat)
            .unwrap_or_else(|| panic!("seat {seat} took a turn with an empty hand"));

        self.shared.record(GameEvent::Deck {
            cards: table.pile(),
        });
        self.shared.record(GameEvent::Hand { seat, card: held });

        let drawn = table.draw();
        self.shared.count_turn();
        self.shared.record(GameEvent::Draw { seat, card: drawn });

        let won = drawn == held;
        self.shared.render(&TableSnapshot {
            active: seat,
            drawn,
            won,
            hands: table.hands(),
            pile: table.pile(),
        });

        if won {
            self.shared.record(GameEvent::Win { seat, held, drawn });
            table.discard(drawn);
            info!(seat, card = %drawn, "round won");
            self.shared.barrier.close_round(seat);
            return TurnOutcome::Won;
        }

        let (discarded, outcome) = if self.shared.coin_toss() {
            (drawn, TurnOutcome::KeptHeld)
        } else {
            table.replace_hand(seat, drawn);
            (held, TurnOutcome::KeptDrawn)
        };
        table.discard(discarded);
        self.shared.record(GameEvent::Discard {
            seat,
            card: discarded,
        });
        self.shared.token.pass_turn(seat, self.next);
        outcome
    }

    /// Round-end notification: return the hand to the pile and move the
    /// token on so the next seat can do the same.
    fn clean_up(&self) {
        let seat = self.seat;
        self.shared.record(GameEvent::RoundComplete { seat });
        if let Some(card) = self.shared.table.take_hand(seat) {
            self.shared.table.discard(card);
        }
        self.shared.token.pass_turn(seat, self.next);
        debug!(seat, "hand returned");
    }

    fn leave(&self) -> Result<(), Aborted> {
        let seat = self.seat;
        self.shared.token.await_turn(seat)?;
        self.shared.record(GameEvent::GameFinished { seat });
        self.shared.token.pass_turn(seat, self.next);
        debug!(seat, "player left the table");
        Ok(())
    }
}
