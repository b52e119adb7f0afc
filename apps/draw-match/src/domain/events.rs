//! Game events handed to the event log.
//!
//! Seats are 0-based everywhere in the engine; the text rendering shows them
//! 1-based, as players are announced at the table.

use std::fmt;

use serde::Serialize;

use crate::domain::cards::{format_cards, Card};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Dealer shuffles the pile at the start of round `round` (1-based).
    Shuffle { round: usize, rounds: usize },
    /// Dealer deals `card` into the empty hand of `seat`.
    Deal { seat: usize, card: Card },
    /// Snapshot of the pile taken at the start of a turn.
    Deck { cards: Vec<Card> },
    /// Card held by `seat` when its turn starts.
    Hand { seat: usize, card: Card },
    Draw { seat: usize, card: Card },
    Discard { seat: usize, card: Card },
    Win { seat: usize, held: Card, drawn: Card },
    /// `seat` has cleaned up after the round ended.
    RoundComplete { seat: usize },
    /// `seat` observed the end of the game and is leaving the table.
    GameFinished { seat: usize },
    /// Dealer has finished all rounds.
    GameEnd { rounds: usize },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Shuffle { round, rounds } => {
                write!(f, "DEALER  : shuffle (round {round} / {rounds})")
            }
            GameEvent::Deal { seat, card } => {
                write!(f, "DEALER  : deals {card} to player {}", seat + 1)
            }
            GameEvent::Deck { cards } => write!(f, "DECK    : {}", format_cards(cards)),
            GameEvent::Hand { seat, card } => write!(f, "PLAYER {}: hand {card}", seat + 1),
            GameEvent::Draw { seat, card } => write!(f, "PLAYER {}: draws {card}", seat + 1),
            GameEvent::Discard { seat, card } => {
                write!(f, "PLAYER {}: discards {card}", seat + 1)
            }
            GameEvent::Win { seat, held, drawn } => {
                writeln!(f, "PLAYER {}: hand {drawn} {held}", seat + 1)?;
                write!(f, "PLAYER {}: wins", seat + 1)
            }
            GameEvent::RoundComplete { seat } => {
                write!(f, "PLAYER {}: round completed", seat + 1)
            }
            GameEvent::GameFinished { seat } => write!(f, "PLAYER {}: game finished", seat + 1),
            GameEvent::GameEnd { rounds } => write!(f, "DEALER  : game over after {rounds} rounds"),
        }
    }
}
