#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use draw_match::{build_game, Game, GameConfig, GameEvent, GameSummary, MemoryLog};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

/// Upper bound for a whole game. A protocol bug shows up as a hang, so the
/// game runs on a watcher thread and the test fails instead of blocking.
pub const GAME_TIMEOUT: Duration = Duration::from_secs(30);

/// Headless game with a fixed seed whose events are kept in memory.
pub fn headless_game(seed: u64, rounds: usize) -> (Game, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::new());
    let game = build_game(GameConfig::headless(Some(seed)).with_rounds(rounds))
        .with_log(log.clone())
        .build()
        .expect("build headless game");
    (game, log)
}

pub fn play_within_timeout(game: Game) -> GameSummary {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(game.play());
    });
    rx.recv_timeout(GAME_TIMEOUT)
        .expect("game did not terminate in time")
        .expect("game failed")
}

/// Events split per round, starting at each shuffle. Dealer events after the
/// last round land in the final segment.
pub fn rounds_of(events: &[GameEvent]) -> Vec<Vec<GameEvent>> {
    let mut rounds: Vec<Vec<GameEvent>> = Vec::new();
    for event in events {
        if matches!(event, GameEvent::Shuffle { .. }) {
            rounds.push(Vec::new());
        }
        if let Some(current) = rounds.last_mut() {
            current.push(event.clone());
        }
    }
    rounds
}

/// Coin toss results of every no-match turn, `true` for heads.
pub fn coin_tosses(events: &[GameEvent]) -> Vec<bool> {
    let mut tosses = Vec::new();
    let mut last_draw = None;
    for event in events {
        match event {
            GameEvent::Draw { card, .. } => last_draw = Some(*card),
            GameEvent::Discard { card, .. } => {
                let drawn = last_draw.take().expect("discard without a draw");
                tosses.push(*card == drawn);
            }
            _ => {}
        }
    }
    tosses
}
