pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: u8 = 13;
pub const PLAYERS: usize = 3;
pub const NUM_ROUNDS: usize = 3;

/// Total number of cards in play for the life of a game.
pub const DECK_SIZE: usize = NUM_SUITS * NUM_RANKS as usize;

/// Seat to the left of `seat`, wrapping around the table.
pub fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYERS
}

/// Seat that receives the turn token when round `round` (0-based) opens.
pub fn starting_seat_for_round(round: usize) -> usize {
    round % PLAYERS
}
