//! Tracing subscriber for test binaries.
//!
//! A game runs on named dealer and player threads, so one global subscriber
//! with thread names in every line is installed per test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level used when neither variable is set. Keeps passing runs quiet.
const DEFAULT_FILTER: &str = "warn";

/// Install the test subscriber. Later calls, from any thread, do nothing.
///
/// `TEST_LOG` wins over `RUST_LOG`; with neither set only warnings show:
///
/// ```bash
/// TEST_LOG=draw_match=trace cargo test -p draw-match
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        // Another crate's ctor may have installed a subscriber already.
        let _ = fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .with_thread_names(true)
            .without_time()
            .try_init();
    });
}

fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
