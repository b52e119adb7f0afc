//! Synchronization protocol: shared card state, the round barrier and the
//! turn token.
//!
//! Mutation rights over the pile and the hands follow protocol phase rather
//! than a global lock: the token holder mutates them during a round, the
//! dealer between rounds.

use thiserror::Error;

pub mod barrier;
pub mod table;
pub mod turn;

pub use barrier::{RoundBarrier, RoundSignal};
pub use table::{Hand, Table};
pub use turn::TurnToken;

/// Returned by every blocking wait once the game has been torn down after a
/// participant panicked.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("game aborted")]
pub struct Aborted;
