//! Turn token: the exclusive right of one player to draw and discard.
//!
//! All turn flags share one lock so that a hand-off clears the giver and sets
//! the receiver in a single critical section. Each seat waits on its own
//! condition variable, so a hand-off wakes exactly the recipient.

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use super::Aborted;
use crate::domain::PLAYERS;

#[derive(Debug, Default)]
struct TokenState {
    holders: [bool; PLAYERS],
    /// Set by the termination broadcast, after which every seat may hold
    /// the token at once.
    released: bool,
    aborted: bool,
}

impl TokenState {
    fn holder_count(&self) -> usize {
        self.holders.iter().filter(|&&h| h).count()
    }
}

pub struct TurnToken {
    state: Mutex<TokenState>,
    seats: [Condvar; PLAYERS],
}

impl TurnToken {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            seats: std::array::from_fn(|_| Condvar::new()),
        }
    }

    /// Block until `seat` holds the token. Returns immediately when the
    /// token was handed over before the call.
    pub fn await_turn(&self, seat: usize) -> Result<(), Aborted> {
        let mut state = self.state.lock();
        loop {
            if state.aborted {
                return Err(Aborted);
            }
            if state.holders[seat] {
                return Ok(());
            }
            self.seats[seat].wait(&mut state);
        }
    }

    /// Hand the token from `from` to `to` and wake the recipient.
    ///
    /// # Panics
    ///
    /// Panics if `from` does not hold the token, or if the hand-off would
    /// leave more than one holder before the termination broadcast.
    pub fn pass_turn(&self, from: usize, to: usize) {
        let mut state = self.state.lock();
        assert!(
            state.holders[from],
            "seat {from} passed the turn token without holding it"
        );
        state.holders[from] = false;
        state.holders[to] = true;
        if !state.released {
            assert_eq!(
                state.holder_count(),
                1,
                "turn token duplicated: holders {:?}",
                state.holders
            );
        }
        trace!(from, to, "turn passed");
        self.seats[to].notify_one();
    }

    /// Dealer side: hand the token to the starting seat of a round.
    ///
    /// # Panics
    ///
    /// Panics if any seat still holds the token.
    pub fn grant(&self, seat: usize) {
        let mut state = self.state.lock();
        assert_eq!(
            state.holder_count(),
            0,
            "turn token granted to seat {seat} while held: {:?}",
            state.holders
        );
        state.holders[seat] = true;
        self.seats[seat].notify_one();
    }

    /// Dealer side: clear every turn flag before a new round opens.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        assert!(!state.released, "turn token reset after release");
        state.holders = [false; PLAYERS];
    }

    /// Termination broadcast: grant the token to every seat in seating order
    /// so each player can observe the end of the game and leave.
    pub fn release_all(&self) {
        let mut state = self.state.lock();
        state.released = true;
        for seat in 0..PLAYERS {
            state.holders[seat] = true;
            self.seats[seat].notify_one();
        }
    }

    /// Tear down: wake every seat. Every later wait returns [`Aborted`].
    pub fn abort(&self) {
        let mut state = self.state.lock();
        state.aborted = true;
        for seat in &self.seats {
            seat.notify_all();
        }
    }

    pub fn holders(&self) -> [bool; PLAYERS] {
        self.state.lock().holders
    }

    pub fn holder_count(&self) -> usize {
        self.state.lock().holder_count()
    }
}

impl Default for TurnToken {
    fn default() -> Self {
        Self::new()
    }
}
