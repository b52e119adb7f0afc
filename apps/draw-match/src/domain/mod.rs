//! Domain layer: cards, table constants and game events.

pub mod cards;
pub mod events;
pub mod rules;

// Re-exports for ergonomics
pub use cards::{format_cards, full_deck, Card};
pub use events::GameEvent;
pub use rules::{
    next_seat, starting_seat_for_round, DECK_SIZE, NUM_RANKS, NUM_ROUNDS, NUM_SUITS, PLAYERS,
};
