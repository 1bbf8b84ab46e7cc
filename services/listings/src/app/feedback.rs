//! services/listings/src/app/feedback.rs
//!
//! Application service for tenant feedback. Both derived flags are decided
//! once, at save time; verification can later be granted manually but is
//! never automatically revoked.

use std::sync::Arc;

use tracing::info;

use greenlease_core::domain::{Feedback, FeedbackDraft};
use greenlease_core::ports::FeedbackStore;
use greenlease_core::stats::FeedbackStatistics;

use crate::error::ServiceError;

#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Feedback>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// All feedback for one property, newest first. The property id is
    /// trusted to reference an existing listing; that check happens
    /// upstream.
    pub async fn for_property(&self, property_id: i64) -> Result<Vec<Feedback>, ServiceError> {
        Ok(self.store.find_by_property(property_id).await?)
    }

    pub async fn verified(&self) -> Result<Vec<Feedback>, ServiceError> {
        Ok(self.store.find_verified().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Feedback>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Validates and persists a submission. A complete submission (name,
    /// email, rating, non-blank comment) is verified on the spot; four or
    /// more stars recommends the property.
    pub async fn submit(&self, draft: FeedbackDraft) -> Result<Feedback, ServiceError> {
        draft.validate()?;
        let verified = draft.qualifies_for_verification();
        let recommended = draft.is_recommended();
        let feedback = self.store.insert(&draft, verified, recommended).await?;
        info!(
            feedback_id = feedback.id,
            property_id = feedback.property_id,
            verified,
            recommended,
            "feedback recorded"
        );
        Ok(feedback)
    }

    /// Administrative verification of a submission that did not qualify on
    /// its own. `Ok(None)` when the id references nothing.
    pub async fn verify(&self, id: i64) -> Result<Option<Feedback>, ServiceError> {
        let verified = self.store.mark_verified(id).await?;
        if verified.is_some() {
            info!(feedback_id = id, "feedback verified");
        }
        Ok(verified)
    }

    /// Physical removal; deleting an unknown id is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        info!(feedback_id = id, "feedback deleted");
        Ok(())
    }

    /// Summary statistics for one property's feedback. Counts cover every
    /// record; the averages come from the store's verified-only aggregates.
    pub async fn statistics(&self, property_id: i64) -> Result<FeedbackStatistics, ServiceError> {
        let feedback = self.store.find_by_property(property_id).await?;
        let total = feedback.len() as i64;
        let verified = feedback.iter().filter(|f| f.is_verified).count() as i64;
        let recommended = feedback.iter().filter(|f| f.is_recommended).count() as i64;
        let average_rating = self.store.average_rating_for_property(property_id).await?;
        let average_eco_rating = self
            .store
            .average_eco_rating_for_property(property_id)
            .await?;
        Ok(FeedbackStatistics::new(
            total,
            verified,
            recommended,
            average_rating,
            average_eco_rating,
        ))
    }
}
