use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the diagnostics subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Diagnostics go to stderr so they never interleave with the table on stdout.
pub fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
