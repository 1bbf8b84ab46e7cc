//! services/listings/src/telemetry.rs
//!
//! Tracing bootstrap for whatever binary embeds this service layer.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber: an env-filter seeded with the
/// configured level plus the standard fmt layer. Call once at startup.
pub fn init(level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
