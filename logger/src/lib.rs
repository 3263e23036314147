//! `env_logger` setup shared by the TRv1 test crates.
//!
//! Output is filtered through `RUST_LOG`; every entry point may be called
//! more than once and only the first call installs the logger.

use std::env;

const DEFAULT_FILTER: &str = "error";

fn init(filter: &str) {
    let _ = env_logger::Builder::new()
        .is_test(true)
        .parse_filters(filter)
        .format_timestamp_nanos()
        .try_init();
}

/// Uses `RUST_LOG`, or `default` when it is unset.
pub fn setup_with_default(default: &str) {
    let filter = env::var(env_logger::DEFAULT_FILTER_ENV).unwrap_or_else(|_| default.to_string());
    init(&filter);
}

/// Ignores `RUST_LOG` and applies `filter` as given.
pub fn setup_with(filter: &str) {
    init(filter);
}

/// Uses `RUST_LOG`, reporting errors only when it is unset.
pub fn setup() {
    setup_with_default(DEFAULT_FILTER);
}
