//! Test doubles for scenario tests.

use std::collections::VecDeque;

use crate::domain::Card;
use crate::rng::Randomness;

/// Deterministic [`Randomness`] that stacks the deck and scripts coin tosses.
///
/// Each shuffle moves the requested ranks to the front of the pile in order,
/// leaving the other cards where they were. Shuffles past the last script
/// reuse the last one. Coin tosses come from the script and fall back to
/// heads once it runs out.
pub struct ScriptedRng {
    stacks: Vec<Vec<u8>>,
    shuffles: usize,
    tosses: VecDeque<bool>,
    tossed: usize,
    panic_on_toss: Option<usize>,
}

impl ScriptedRng {
    /// Stack the same front cards on every shuffle.
    pub fn stacked(front: &[u8]) -> Self {
        Self::stacked_rounds(&[front])
    }

    /// Stack `fronts[n]` on the n-th shuffle.
    pub fn stacked_rounds(fronts: &[&[u8]]) -> Self {
        Self {
            stacks: fronts.iter().map(|f| f.to_vec()).collect(),
            shuffles: 0,
            tosses: VecDeque::new(),
            tossed: 0,
            panic_on_toss: None,
        }
    }

    pub fn with_tosses(mut self, tosses: &[bool]) -> Self {
        self.tosses = tosses.iter().copied().collect();
        self
    }

    /// Panic on the n-th coin toss (1-based), inside whichever thread asks.
    pub fn panic_on_toss(mut self, n: usize) -> Self {
        self.panic_on_toss = Some(n);
        self
    }
}

impl Randomness for ScriptedRng {
    fn coin_toss(&mut self) -> bool {
        self.tossed += 1;
        if self.panic_on_toss == Some(self.tossed) {
            panic!("scripted panic on toss {}", self.tossed);
        }
        self.tosses.pop_front().unwrap_or(true)
    }

    fn shuffle(&mut self, cards: &mut VecDeque<Card>) {
        let index = self.shuffles.min(self.stacks.len().saturating_sub(1));
        self.shuffles += 1;
        let Some(front) = self.stacks.get(index) else {
            return;
        };

        for (slot, &rank) in front.iter().enumerate() {
            let wanted = Card::new(rank);
            let found = cards
                .iter()
                .skip(slot)
                .position(|&c| c == wanted)
                .unwrap_or_else(|| panic!("rank {rank} not left in the pile to stack"));
            let card = cards.remove(slot + found).expect("position is in range");
            cards.insert(slot, card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::full_deck;

    #[test]
    fn stacks_requested_ranks_in_order() {
        let mut cards: VecDeque<Card> = full_deck().into();
        let mut rng = ScriptedRng::stacked(&[2, 7, 2, 5]);
        rng.shuffle(&mut cards);

        let front: Vec<u8> = cards.iter().take(4).map(|c| c.rank()).collect();
        assert_eq!(front, vec![2, 7, 2, 5]);
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn later_shuffles_follow_their_own_script() {
        let mut cards: VecDeque<Card> = full_deck().into();
        let mut rng = ScriptedRng::stacked_rounds(&[&[1], &[9]]);
        rng.shuffle(&mut cards);
        assert_eq!(cards[0], Card::new(1));
        rng.shuffle(&mut cards);
        assert_eq!(cards[0], Card::new(9));
        rng.shuffle(&mut cards);
        assert_eq!(cards[0], Card::new(9));
    }

    #[test]
    fn tosses_fall_back_to_heads() {
        let mut rng = ScriptedRng::stacked(&[]).with_tosses(&[false]);
        assert!(!rng.coin_toss());
        assert!(rng.coin_toss());
    }

    #[test]
    #[should_panic(expected = "scripted panic on toss 2")]
    fn panics_on_the_scripted_toss() {
        let mut rng = ScriptedRng::stacked(&[]).panic_on_toss(2);
        assert!(rng.coin_toss());
        rng.coin_toss();
    }
}
