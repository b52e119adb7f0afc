//! Game flow: the shared state owner and the threads that drive it.
//!
//! One dealer thread and one thread per seat share a single [`SharedGame`]
//! behind an `Arc`. [`Game::play`] spawns them, waits for all of them to
//! return and hands back the dealer's [`GameSummary`].
//!
//! A thread that unwinds tears the shared state down on its way out, so the
//! others return [`Aborted`] from whatever they were waiting on instead of
//! blocking forever.

mod dealer;
mod player;
mod summary;


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use tracing::{info, warn};

pub use dealer::Dealer;
pub use player::{Player, TurnOutcome};
pub use summary::{GameSummary, RoundSummary};

use crate::config::GameConfig;
use crate::domain::{GameEvent, PLAYERS};
use crate::error::AppError;
use crate::protocol::{Aborted, RoundBarrier, Table, TurnToken};
use crate::rng::{Randomness, SeededRng};
use crate::sinks::{
    ConsoleView, EventLog, NullLog, NullView, TableSnapshot, TableView, WriterLog,
};

/// Everything the participants share: card state, protocol primitives and the
/// collaborators they report to.
pub struct SharedGame {
    pub table: Table,
    pub barrier: RoundBarrier,
    pub token: TurnToken,
    /// Single generator feeding both the shuffle and the coin tosses.
    rng: Mutex<Box<dyn Randomness>>,
    log: Arc<dyn EventLog>,
    view: Arc<dyn TableView>,
    turns: AtomicUsize,
}

impl SharedGame {
    pub fn new(
        rng: Box<dyn Randomness>,
        log: Arc<dyn EventLog>,
        view: Arc<dyn TableView>,
    ) -> Self {
        Self::with_table(Table::new(), rng, log, view)
    }

    pub(crate) fn with_table(
        table: Table,
        rng: Box<dyn Randomness>,
        log: Arc<dyn EventLog>,
        view: Arc<dyn TableView>,
    ) -> Self {
        Self {
            table,
            barrier: RoundBarrier::new(),
            token: TurnToken::new(),
            rng: Mutex::new(rng),
            log,
            view,
            turns: AtomicUsize::new(0),
        }
    }

    pub fn record(&self, event: GameEvent) {
        self.log.record(&event);
    }

    pub fn render(&self, snapshot: &TableSnapshot) {
        self.view.render(snapshot);
    }

    pub fn round_banner(&self, round: usize, rounds: usize) {
        self.view.round_banner(round, rounds);
    }

    pub fn coin_toss(&self) -> bool {
        self.rng.lock().coin_toss()
    }

    pub fn shuffle_pile(&self) {
        let mut rng = self.rng.lock();
        self.table.shuffle(&mut **rng);
    }

    /// Wake every participant and fail all of their pending and later waits.
    pub fn abort(&self) {
        warn!("aborting game");
        self.barrier.abort();
        self.token.abort();
    }

    fn count_turn(&self) {
        self.turns.fetch_add(1, Ordering::Relaxed);
    }

    fn take_turn_count(&self) -> usize {
        self.turns.swap(0, Ordering::Relaxed)
    }
}

/// A configured game, ready to be played once.
pub struct Game {
    shared: Arc<SharedGame>,
    rounds: usize,
    seed: Option<u64>,
}

impl Game {
    /// Handle on the shared state, for inspection after [`Game::play`].
    pub fn shared(&self) -> Arc<SharedGame> {
        Arc::clone(&self.shared)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Spawn the dealer and the players, play every round and join all
    /// threads.
    ///
    /// Every thread is joined even when one of them panicked. The error names
    /// the first participant (in seat order, dealer last) whose thread
    /// panicked.
    pub fn play(self) -> Result<GameSummary, AppError> {
        info!(rounds = self.rounds, seed = ?self.seed, "starting game");

        let mut players = Vec::with_capacity(PLAYERS);
        for seat in 0..PLAYERS {
            let player = Player::new(seat, Arc::clone(&self.shared));
            let handle = spawn_participant(
                &self.shared,
                format!("player-{}", seat + 1),
                move || player.run(),
            )?;
            players.push(handle);
        }

        let dealer = Dealer::new(Arc::clone(&self.shared), self.rounds, self.seed);
        let dealer = spawn_participant(&self.shared, "dealer".to_string(), move || dealer.run())?;

        let mut panicked = None;
        for (seat, handle) in players.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(format!("player {}", seat + 1));
            }
        }
        let dealer = dealer.join();

        let summary = match (panicked, dealer) {
            (Some(role), _) => return Err(AppError::participant_panicked(role)),
            (None, Err(_)) => return Err(AppError::participant_panicked("dealer")),
            // Only a panic aborts the game, and every panic is caught above.
            (None, Ok(Err(Aborted))) => return Err(AppError::participant_panicked("unknown")),
            (None, Ok(Ok(summary))) => summary,
        };

        info!(
            rounds = summary.rounds.len(),
            turns = summary.total_turns(),
            "game complete"
        );
        Ok(summary)
    }
}

/// Aborts the shared game if dropped while its thread is unwinding.
struct AbortOnPanic(Arc<SharedGame>);

impl Drop for AbortOnPanic {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.abort();
        }
    }
}

fn spawn_participant<T, F>(
    shared: &Arc<SharedGame>,
    name: String,
    body: F,
) -> Result<JoinHandle<Result<T, Aborted>>, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, Aborted> + Send + 'static,
{
    let guard = AbortOnPanic(Arc::clone(shared));
    thread::Builder::new()
        .name(name)
        .spawn(move || {
            let _guard = guard;
            body()
        })
        .map_err(|e| {
            // Threads already running must not wait for one that never started.
            shared.abort();
            AppError::from(e)
        })
}

/// Builder for [`Game`] (used in both tests and main).
///
/// Collaborators not supplied explicitly are derived from the [`GameConfig`].
pub struct GameBuilder {
    config: GameConfig,
    rng: Option<Box<dyn Randomness>>,
    log: Option<Arc<dyn EventLog>>,
    view: Option<Arc<dyn TableView>>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: None,
            log: None,
            view: None,
        }
    }

    pub fn with_rng(mut self, rng: impl Randomness + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn with_log(mut self, log: Arc<dyn EventLog>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn with_view(mut self, view: Arc<dyn TableView>) -> Self {
        self.view = Some(view);
        self
    }

    pub fn build(self) -> Result<Game, AppError> {
        self.config.validate()?;

        let (rng, seed): (Box<dyn Randomness>, Option<u64>) = match self.rng {
            Some(rng) => (rng, self.config.seed),
            None => {
                let rng = SeededRng::new(self.config.seed);
                let seed = rng.seed();
                (Box::new(rng), Some(seed))
            }
        };

        let log: Arc<dyn EventLog> = match (self.log, &self.config.log_path) {
            (Some(log), _) => log,
            (None, Some(path)) => Arc::new(WriterLog::create(path, self.config.log_format)?),
            (None, None) => Arc::new(NullLog),
        };

        let view: Arc<dyn TableView> = match self.view {
            Some(view) => view,
            None if self.config.console => Arc::new(ConsoleView),
            None => Arc::new(NullView),
        };

        Ok(Game {
            shared: Arc::new(SharedGame::new(rng, log, view)),
            rounds: self.config.rounds,
            seed,
        })
    }
}

pub fn build_game(config: GameConfig) -> GameBuilder {
    GameBuilder::new(config)
}
