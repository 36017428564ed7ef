//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str =
    "autosalon=info,autosalon_core=info,autosalon_storage=info,autosalon_server=info,tower_http=info";

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over
/// [`DEFAULT_FILTER`]. Returns `false` if a subscriber was already installed,
/// which happens when tests initialise logging more than once.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
