//! Structured logging initialization.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG takes precedence over the configured filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
