//! Tracing subscriber setup for the `ltv` binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Filter used for `--verbose` when `RUST_LOG` is not set.
const VERBOSE_FILTER: &str = "warn,ltv_decoder=debug,ltv_encoder=debug";

/// Install the global subscriber. Logs go to stderr so stdout stays
/// pipeable.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
