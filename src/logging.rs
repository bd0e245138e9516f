//! Logging setup
//!
//! Installs a `tracing` fmt subscriber. The filter comes from `RUST_LOG`
//! and falls back to `DEFAULT_FILTER`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "notif_relay=info,notif_server=info,tower_http=info";

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
