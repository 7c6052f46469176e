pub mod builders;
pub mod fake_runner;

use std::sync::Once;

use taskgate::logging::{parse_level_str, LOG_ENV_VAR};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Route `taskgate` events into the test harness's captured output.
///
/// The level comes from `TASKGATE_LOG`, as for the binary, but defaults to
/// `info` so a failing test shows where each run ended. Set
/// `TASKGATE_LOG=debug` for the resolved plan. Only the `taskgate` target is
/// enabled.
pub fn init_tracing() {
    INIT.call_once(|| {
        let level = std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO);
        let filter = EnvFilter::new(format!("taskgate={}", level.as_str().to_ascii_lowercase()));

        // A test binary may already have installed a subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}
