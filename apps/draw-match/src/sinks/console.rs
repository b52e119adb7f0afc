//! Console rendering of the table.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::domain::{format_cards, Card, PLAYERS};
use crate::protocol::Hand;

/// What the console shows after a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Seat that just drew.
    pub active: usize,
    pub drawn: Card,
    /// Whether the draw matched the active seat's hand.
    pub won: bool,
    pub hands: [Hand; PLAYERS],
    pub pile: Vec<Card>,
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (seat, hand) in self.hands.iter().enumerate() {
            writeln!(f, "PLAYER {}:", seat + 1)?;
            let held = hand.map_or_else(|| "-".to_string(), |card| card.to_string());
            if seat == self.active && self.won {
                writeln!(f, "  HAND {held} {}", self.drawn)?;
                writeln!(f, "  WIN yes")?;
            } else {
                writeln!(f, "  HAND {held}")?;
                writeln!(f, "  WIN no")?;
            }
        }
        write!(f, "DECK: {}", format_cards(&self.pile))
    }
}

pub trait TableView: Send + Sync {
    /// Announce the start of round `round` (1-based) of `rounds`.
    fn round_banner(&self, round: usize, rounds: usize);

    fn render(&self, snapshot: &TableSnapshot);
}

/// Writes to stdout.
pub struct ConsoleView;

impl ConsoleView {
    fn emit(&self, text: fmt::Arguments<'_>) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_fmt(text).and_then(|_| out.write_all(b"\n")) {
            debug!(error = %e, "console write failed");
        }
    }
}

impl TableView for ConsoleView {
    fn round_banner(&self, round: usize, rounds: usize) {
        self.emit(format_args!("\n----- ROUND {round} / {rounds} -----"));
    }

    fn render(&self, snapshot: &TableSnapshot) {
        self.emit(format_args!("{snapshot}"));
    }
}

/// Renders nothing.
pub struct NullView;

impl TableView for NullView {
    fn round_banner(&self, _round: usize, _rounds: usize) {}

    fn render(&self, _snapshot: &TableSnapshot) {}
}
