//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging at `info` unless `RUST_LOG` overrides it
///
/// Safe to call more than once; later calls leave the installed logger.
pub fn init() {
    if !init_with_default_filter("info") {
        log::debug!("Logger already installed");
    }
}

/// Initialize logging for tests
///
/// Output goes through the test harness capture. Returns `false` if a
/// logger was already installed.
pub fn try_init() -> bool {
    env_logger::builder().is_test(true).try_init().is_ok()
}

/// Initialize logging with a default filter used when `RUST_LOG` is unset
pub fn init_with_default_filter(filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init()
        .is_ok()
}
