use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

/// Installs the global `tracing` subscriber: `RUST_LOG` when set, otherwise
/// `<crate>=<config.rust_log>`, printed by the fmt layer.
///
/// Returns false when a subscriber was already installed (tests, embedding apps).
pub fn init_tracing(config: &EngineConfig) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
