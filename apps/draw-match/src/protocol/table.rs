//! Shared card state: the draw pile and one hand slot per seat.
//!
//! Every field sits behind its own lock, so concurrent reads never observe a
//! torn value. Cross-field invariants (who may draw, when hands are dealt) are
//! the protocol's business, not this module's.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::domain::{full_deck, Card, DECK_SIZE, PLAYERS};
use crate::rng::Randomness;

/// A hand is either empty or holds exactly one card.
pub type Hand = Option<Card>;

pub struct Table {
    pile: Mutex<VecDeque<Card>>,
    hands: [Mutex<Hand>; PLAYERS],
}

impl Table {
    /// Fresh table: full pile in deck order, all hands empty.
    pub fn new() -> Self {
        Self::with_pile(full_deck())
    }

    pub(crate) fn with_pile(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            pile: Mutex::new(cards.into_iter().collect()),
            hands: std::array::from_fn(|_| Mutex::new(None)),
        }
    }

    /// Remove the front card of the pile.
    ///
    /// # Panics
    ///
    /// An empty pile at draw time means the conservation invariant was broken.
    pub fn draw(&self) -> Card {
        self.pile
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("draw attempted on an empty pile"))
    }

    /// Append `card` to the back of the pile.
    pub fn discard(&self, card: Card) {
        self.pile.lock().push_back(card);
    }

    pub fn shuffle(&self, rng: &mut dyn Randomness) {
        rng.shuffle(&mut self.pile.lock());
    }

    pub fn pile(&self) -> Vec<Card> {
        self.pile.lock().iter().copied().collect()
    }

    pub fn pile_len(&self) -> usize {
        self.pile.lock().len()
    }

    pub fn hand(&self, seat: usize) -> Hand {
        *self.hands[seat].lock()
    }

    pub fn hands(&self) -> [Hand; PLAYERS] {
        std::array::from_fn(|seat| self.hand(seat))
    }

    /// Deal `card` into the hand of `seat`.
    ///
    /// # Panics
    ///
    /// Dealing only ever happens into empty hands.
    pub fn deal(&self, seat: usize, card: Card) {
        let mut hand = self.hands[seat].lock();
        assert!(
            hand.is_none(),
            "seat {seat} dealt {card} while still holding {:?}",
            *hand
        );
        *hand = Some(card);
    }

    /// Put `card` in the hand of `seat`, returning what it replaced.
    pub fn replace_hand(&self, seat: usize, card: Card) -> Hand {
        self.hands[seat].lock().replace(card)
    }

    pub fn take_hand(&self, seat: usize) -> Hand {
        self.hands[seat].lock().take()
    }

    /// Cards accounted for across the pile and the hands.
    pub fn cards_in_play(&self) -> usize {
        let held = (0..PLAYERS).filter(|&seat| self.hand(seat).is_some()).count();
        self.pile_len() + held
    }

    /// Check the conservation law at a quiescent point.
    ///
    /// # Panics
    ///
    /// Panics when cards were lost or duplicated.
    pub fn assert_conserved(&self) {
        let in_play = self.cards_in_play();
        assert_eq!(
            in_play, DECK_SIZE,
            "card conservation violated: {in_play} cards in play, expected {DECK_SIZE}"
        );
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
