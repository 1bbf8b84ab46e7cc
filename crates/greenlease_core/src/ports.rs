//! crates/greenlease_core/src/ports.rs
//!
//! Defines the record-store contracts (traits) for the application's core
//! logic. These traits form the boundary of the hexagonal architecture,
//! allowing the core to stay independent of the concrete store behind them.

use async_trait::async_trait;

use crate::domain::{Feedback, FeedbackDraft, Property, PropertyDraft, User, UserDraft};
use crate::filter::PropertyQuery;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A failure raised by the record store itself.
///
/// A lookup that finds nothing is not an error; those operations return
/// `Ok(None)` or an empty list and the caller picks its own fallback.
/// Store failures are opaque to the core and are never retried here.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("record store failure: {0}")]
    Store(String),
    #[error("record store constraint violated: {0}")]
    Constraint(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Store Ports (Traits)
//=========================================================================================

/// Persistence operations for [`Property`] records.
///
/// Writes take the draft together with the already-computed overall eco
/// score, so a property can never be saved without its derived score.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<Property>>;

    /// Every property, ordered by eco score then creation time, both
    /// descending.
    async fn find_all(&self) -> PortResult<Vec<Property>>;

    /// The listings selected by one resolved query mode.
    async fn find(&self, query: &PropertyQuery) -> PortResult<Vec<Property>>;

    async fn insert(&self, draft: &PropertyDraft, overall_eco_score: f64)
        -> PortResult<Property>;

    /// Returns `Ok(None)` when no property has the given id.
    async fn update(
        &self,
        id: i64,
        draft: &PropertyDraft,
        overall_eco_score: f64,
    ) -> PortResult<Option<Property>>;

    async fn delete(&self, id: i64) -> PortResult<()>;

    async fn count(&self) -> PortResult<i64>;

    /// Mean stored eco score across scored properties, 0.0 when there are
    /// none.
    async fn average_eco_score(&self) -> PortResult<f64>;
}

/// Persistence operations for [`Feedback`] records.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<Feedback>>;

    /// Every feedback record, newest first.
    async fn find_all(&self) -> PortResult<Vec<Feedback>>;

    /// All feedback for one property, newest first.
    async fn find_by_property(&self, property_id: i64) -> PortResult<Vec<Feedback>>;

    /// Verified feedback across all properties, newest first.
    async fn find_verified(&self) -> PortResult<Vec<Feedback>>;

    /// Persists a submission with its derived flags.
    async fn insert(
        &self,
        draft: &FeedbackDraft,
        verified: bool,
        recommended: bool,
    ) -> PortResult<Feedback>;

    /// Flips verification on; the flag is never flipped back off. Returns
    /// `Ok(None)` when no feedback has the given id.
    async fn mark_verified(&self, id: i64) -> PortResult<Option<Feedback>>;

    async fn delete(&self, id: i64) -> PortResult<()>;

    async fn count_for_property(&self, property_id: i64) -> PortResult<i64>;

    /// Average overall rating over verified feedback for the property,
    /// 0.0 when there is none.
    async fn average_rating_for_property(&self, property_id: i64) -> PortResult<f64>;

    /// Average eco rating over verified feedback whose eco rating is
    /// present and positive, 0.0 when there is none.
    async fn average_eco_rating_for_property(&self, property_id: i64) -> PortResult<f64>;
}

/// Persistence operations for [`User`] records.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> PortResult<Option<User>>;

    async fn exists_by_username(&self, username: &str) -> PortResult<bool>;

    async fn insert(&self, draft: &UserDraft) -> PortResult<User>;
}
