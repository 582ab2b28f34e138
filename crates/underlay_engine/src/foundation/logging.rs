//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize `env_logger` for standalone use (tests, tooling)
///
/// Safe to call more than once; later calls are ignored. Host integrations
/// install their own `log::Log` implementation instead.
pub fn init() {
    let _ = env_logger::builder()
        .is_test(cfg!(test))
        .try_init();
}
