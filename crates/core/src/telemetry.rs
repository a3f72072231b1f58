//! Tracing bootstrap for the embedding shell

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "taskmaster_core=info";

/// Install a global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` and falls back to `default_filter`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
