//! Property tests over seeds and round counts (threaded, so few cases).

include!("common/proptest_prelude.rs");

mod common;

use common::{headless_game, play_within_timeout, rounds_of};
use draw_match::{GameEvent, PLAYERS};
use proptest::prelude::*;

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: the dealer plays exactly the requested rounds, rotating the
    /// starting seat, and every round ends with a win.
    #[test]
    fn prop_rounds_rotate_and_end_in_a_win(
        seed in any::<u64>(),
        rounds in 1usize..=6,
    ) {
        let (game, _log) = headless_game(seed, rounds);
        let summary = play_within_timeout(game);

        prop_assert_eq!(summary.rounds.len(), rounds);
        for (index, round) in summary.rounds.iter().enumerate() {
            prop_assert_eq!(round.round, index + 1);
            prop_assert_eq!(round.starting_seat, index % PLAYERS);
            prop_assert!(round.winner.is_some());
        }
    }

    /// Property: all cards are back in the pile once the game is over, and a
    /// win is the last draw of its round.
    #[test]
    fn prop_cards_are_conserved_and_wins_are_final(
        seed in any::<u64>(),
        rounds in 1usize..=4,
    ) {
        let (game, log) = headless_game(seed, rounds);
        let shared = game.shared();
        play_within_timeout(game);

        prop_assert_eq!(shared.table.pile_len(), 52);
        prop_assert_eq!(shared.table.hands(), [None; PLAYERS]);

        for round in rounds_of(&log.events()) {
            let last_draw = round
                .iter()
                .rposition(|e| matches!(e, GameEvent::Draw { .. }))
                .expect("every round has a draw");
            let win = round
                .iter()
                .position(|e| matches!(e, GameEvent::Win { .. }))
                .expect("every round has a win");
            prop_assert_eq!(win, last_draw + 1);
        }
    }
}
