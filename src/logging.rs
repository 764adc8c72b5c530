//! Tracing subscriber setup.
//!
//! Logs go to stderr so that tables, JSON and CSV on stdout stay clean for
//! piping.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `filter` uses `EnvFilter` directive syntax
/// (`warn`, `bball_stats=debug`, ...); an unparsable filter falls back to `warn`.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
