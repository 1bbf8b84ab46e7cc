//! services/listings/src/error.rs
//!
//! Defines the primary error type for the listings service.

use greenlease_core::domain::ValidationError;
use greenlease_core::ports::PortError;

use crate::config::ConfigError;

/// The primary error type for the `listings` service.
///
/// Every failure is scoped to the request that raised it; nothing here is
/// fatal to the process and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// An error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A payload rejected before any derived field was computed or anything
    /// reached the record store.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An error that propagated up from the record store port.
    #[error("Record store error: {0}")]
    Port(#[from] PortError),

    /// An error from the underlying database library, outside a port call.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
