//! Logging to stderr using env_logger
//!
//! Stdout carries the feed only. `RUST_LOG` selects the level (e.g.
//! `RUST_LOG=debug` to trace API calls); the default is `warn`.

use env_logger::{Builder, Env};

pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
