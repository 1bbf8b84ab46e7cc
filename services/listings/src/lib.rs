//! services/listings/src/lib.rs
//!
//! The application layer of the listings platform: configuration, the
//! Postgres record-store adapter and the services an embedding request
//! handler composes. HTTP routing and template rendering live outside this
//! crate.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod telemetry;

pub use adapters::PgStore;
pub use app::{FeedbackService, PropertyService, UserService};
pub use config::{Config, ConfigError};
pub use error::ServiceError;
