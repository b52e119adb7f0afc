//! Card type and deck construction. Only ranks matter for matching, so a card
//! carries no suit.

use std::fmt;

use serde::Serialize;

use crate::domain::rules::{DECK_SIZE, NUM_RANKS, NUM_SUITS};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    /// Build a card of the given rank. Ranks outside `0..NUM_RANKS` are a
    /// programming error.
    pub const fn new(rank: u8) -> Self {
        assert!(rank < NUM_RANKS, "card rank out of range");
        Card(rank)
    }

    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Honour width/alignment flags so `{:>2}` pads the rank.
        fmt::Display::fmt(&self.0, f)
    }
}

/// Generate the full deck: one run of every rank per suit.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _suit in 0..NUM_SUITS {
        for rank in 0..NUM_RANKS {
            deck.push(Card(rank));
        }
    }
    deck
}

/// Render cards the way the log and console show the pile: each rank
/// right-aligned in two columns and followed by a space.
pub fn format_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards.into_iter().map(|card| format!("{card:>2} ")).collect()
}
