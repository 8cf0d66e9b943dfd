//! Tracing bootstrap for harness runs.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `diagcheck_harness=debug`.
pub const LOG_ENV_VAR: &str = "DIAGCHECK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber writing to the test writer.
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}
