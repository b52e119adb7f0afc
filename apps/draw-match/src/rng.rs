//! Randomness capability shared by the dealer and the players.
//!
//! The game consumes exactly two contracts from its generator: a fair coin
//! toss and a uniform in-place permutation of the pile. [`SeededRng`] is the
//! production implementation; every game has a concrete seed so a run can be
//! replayed from its summary.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::Card;

pub trait Randomness: Send {
    /// Fair coin toss. `true` is heads.
    fn coin_toss(&mut self) -> bool;

    /// Uniformly permute `cards` in place.
    fn shuffle(&mut self, cards: &mut VecDeque<Card>);
}

/// ChaCha-backed generator, deterministic for a given seed.
pub struct SeededRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRng {
    /// Create a generator.
    ///
    /// * `Some(seed)` - reproducible run
    /// * `None` - a fresh seed is drawn from the thread-local generator
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomness for SeededRng {
    fn coin_toss(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn shuffle(&mut self, cards: &mut VecDeque<Card>) {
        cards.make_contiguous().shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::full_deck;

    #[test]
    fn same_seed_same_shuffle() {
        let mut a: VecDeque<Card> = full_deck().into();
        let mut b: VecDeque<Card> = full_deck().into();
        SeededRng::new(Some(42)).shuffle(&mut a);
        SeededRng::new(Some(42)).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a: VecDeque<Card> = full_deck().into();
        let mut b: VecDeque<Card> = full_deck().into();
        SeededRng::new(Some(1)).shuffle(&mut a);
        SeededRng::new(Some(2)).shuffle(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut cards: VecDeque<Card> = full_deck().into();
        SeededRng::new(Some(7)).shuffle(&mut cards);

        let mut sorted: Vec<Card> = cards.into_iter().collect();
        sorted.sort();
        let mut expected = full_deck();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn coin_toss_is_fair() {
        let mut rng = SeededRng::new(Some(2024));
        let tosses = 20_000;
        let heads = (0..tosses).filter(|_| rng.coin_toss()).count();
        let ratio = heads as f64 / tosses as f64;
        assert!(
            (0.48..=0.52).contains(&ratio),
            "heads ratio {ratio} should be close to 0.5"
        );
    }

    #[test]
    fn unseeded_generator_reports_its_seed() {
        let rng = SeededRng::new(None);
        let mut replay = SeededRng::new(Some(rng.seed()));
        let mut fresh = rng;
        let a: Vec<bool> = (0..32).map(|_| fresh.coin_toss()).collect();
        let b: Vec<bool> = (0..32).map(|_| replay.coin_toss()).collect();
        assert_eq!(a, b);
    }
}
