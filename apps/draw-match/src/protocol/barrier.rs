//! Round-boundary rendezvous between the dealer and the players.
//!
//! Two flag groups live here, each with its own lock:
//! - ready flags, one per seat, raised by players after round-end cleanup;
//! - the round phase: the play flag, a round generation counter and the
//!   write-once finished flag.
//!
//! Every signal is state, not a pulse. A waiter that arrives after the signal
//! sees the state already set and proceeds without blocking. Both groups also
//! carry the abort flag, so a torn-down game releases every waiter.

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use super::Aborted;
use crate::domain::PLAYERS;

/// Outcome of waiting for the next round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundSignal {
    /// A round with this generation number is open.
    Opened(u64),
    /// The dealer has ended the game.
    Finished,
}

#[derive(Debug, Default)]
struct ReadyState {
    flags: [bool; PLAYERS],
    aborted: bool,
}

#[derive(Debug, Default)]
struct RoundPhase {
    live: bool,
    generation: u64,
    winner: Option<usize>,
    finished: bool,
    aborted: bool,
}

pub struct RoundBarrier {
    ready: Mutex<ReadyState>,
    all_ready: Condvar,
    phase: Mutex<RoundPhase>,
    opened: Condvar,
    closed: Condvar,
}

impl RoundBarrier {
    pub fn new() -> Self {
        Self {
            ready: Mutex::new(ReadyState::default()),
            all_ready: Condvar::new(),
            phase: Mutex::new(RoundPhase::default()),
            opened: Condvar::new(),
            closed: Condvar::new(),
        }
    }

    /// Dealer side: block until every seat is ready, then lower all flags.
    pub fn await_all_ready(&self) -> Result<(), Aborted> {
        let mut ready = self.ready.lock();
        loop {
            if ready.aborted {
                return Err(Aborted);
            }
            if ready.flags.iter().all(|&r| r) {
                break;
            }
            self.all_ready.wait(&mut ready);
        }
        ready.flags = [false; PLAYERS];
        debug!("all players ready");
        Ok(())
    }

    /// Player side: raise the ready flag of `seat`. Idempotent.
    pub fn signal_ready(&self, seat: usize) {
        let mut ready = self.ready.lock();
        ready.flags[seat] = true;
        self.all_ready.notify_one();
    }

    pub fn ready_flags(&self) -> [bool; PLAYERS] {
        self.ready.lock().flags
    }

    /// Dealer side: mark a new round live and wake every player waiting for it.
    /// Returns the generation number of the opened round.
    pub fn open_round(&self) -> u64 {
        let mut phase = self.phase.lock();
        assert!(!phase.finished, "round opened after the game finished");
        assert!(!phase.live, "round opened while another round is live");
        phase.live = true;
        phase.winner = None;
        phase.generation += 1;
        self.opened.notify_all();
        phase.generation
    }

    /// Player side: block until a round newer than `seen` opens or the game
    /// finishes.
    pub fn await_round_open(&self, seen: u64) -> Result<RoundSignal, Aborted> {
        let mut phase = self.phase.lock();
        loop {
            if phase.aborted {
                return Err(Aborted);
            }
            if phase.finished {
                return Ok(RoundSignal::Finished);
            }
            if phase.generation > seen {
                return Ok(RoundSignal::Opened(phase.generation));
            }
            self.opened.wait(&mut phase);
        }
    }

    /// Winner side: stop play for everyone.
    ///
    /// # Panics
    ///
    /// Only one player can win a round; closing a round that is not live
    /// means two players acted concurrently.
    pub fn close_round(&self, winner: usize) {
        let mut phase = self.phase.lock();
        assert!(
            phase.live,
            "seat {winner} closed a round that is not live (winner: {:?})",
            phase.winner
        );
        phase.live = false;
        phase.winner = Some(winner);
        self.closed.notify_all();
    }

    /// Dealer side: block until the current round is closed and return the
    /// winning seat.
    pub fn await_round_close(&self) -> Result<Option<usize>, Aborted> {
        let mut phase = self.phase.lock();
        while phase.live {
            if phase.aborted {
                return Err(Aborted);
            }
            self.closed.wait(&mut phase);
        }
        Ok(phase.winner)
    }

    /// Dealer side: raise the finished flag and wake everyone waiting for a
    /// round.
    pub fn finish(&self) {
        let mut phase = self.phase.lock();
        assert!(!phase.finished, "game finished twice");
        assert!(!phase.live, "game finished while a round is live");
        phase.finished = true;
        self.opened.notify_all();
    }

    /// Tear down: every current and future wait returns [`Aborted`].
    pub fn abort(&self) {
        self.ready.lock().aborted = true;
        self.all_ready.notify_all();

        let mut phase = self.phase.lock();
        phase.aborted = true;
        self.opened.notify_all();
        self.closed.notify_all();
    }

    pub fn is_live(&self) -> bool {
        self.phase.lock().live
    }

    pub fn is_finished(&self) -> bool {
        self.phase.lock().finished
    }
}

impl Default for RoundBarrier {
    fn default() -> Self {
        Self::new()
    }
}
