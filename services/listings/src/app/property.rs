//! services/listings/src/app/property.rs
//!
//! Application service for property listings. Writes run the two-phase
//! save: validate the draft, compute the eco score from its factors, then
//! hand both to the record store.

use std::sync::Arc;

use tracing::info;

use greenlease_core::domain::{Property, PropertyDraft};
use greenlease_core::eco;
use greenlease_core::filter::{PropertyFilter, PropertyQuery};
use greenlease_core::ports::PropertyStore;
use greenlease_core::stats::EcoStatistics;

use crate::error::ServiceError;

/// Landlord attached to listings submitted without an owner reference.
const DEFAULT_LANDLORD_ID: i64 = 1;

#[derive(Clone)]
pub struct PropertyService {
    store: Arc<dyn PropertyStore>,
}

impl PropertyService {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    /// Every listing, including unavailable ones.
    pub async fn list_all(&self) -> Result<Vec<Property>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Every available listing.
    pub async fn available(&self) -> Result<Vec<Property>, ServiceError> {
        Ok(self.store.find(&PropertyQuery::Available).await?)
    }

    /// `Ok(None)` when the id references nothing; the caller decides its
    /// own fallback.
    pub async fn get(&self, id: i64) -> Result<Option<Property>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Browse with at most one filter mode active; the first applicable
    /// rule in the filter's priority order wins.
    pub async fn browse(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ServiceError> {
        Ok(self.store.find(&filter.resolve()).await?)
    }

    /// Browse by eco-tier label. Labels that name no tier yield the full
    /// available listing.
    pub async fn browse_eco_tier(&self, label: &str) -> Result<Vec<Property>, ServiceError> {
        Ok(self.store.find(&PropertyQuery::for_tier(label)).await?)
    }

    /// Listings in the excellent band, used for the featured shelf.
    pub async fn eco_excellent(&self) -> Result<Vec<Property>, ServiceError> {
        Ok(self
            .store
            .find(&PropertyQuery::EcoScoreRange(8.0, 10.0))
            .await?)
    }

    /// Validates the draft, computes the eco score and inserts the listing.
    /// The stored score always reflects the factors at this save.
    pub async fn create(&self, mut draft: PropertyDraft) -> Result<Property, ServiceError> {
        draft.validate()?;
        if draft.landlord_id.is_none() {
            draft.landlord_id = Some(DEFAULT_LANDLORD_ID);
        }
        let score = eco::overall_score(&draft.eco_factors());
        let property = self.store.insert(&draft, score).await?;
        info!(property_id = property.id, eco_score = score, "property created");
        Ok(property)
    }

    /// The same two-phase save for an existing listing. `Ok(None)` when the
    /// id references nothing.
    pub async fn update(
        &self,
        id: i64,
        draft: PropertyDraft,
    ) -> Result<Option<Property>, ServiceError> {
        draft.validate()?;
        let score = eco::overall_score(&draft.eco_factors());
        let updated = self.store.update(id, &draft, score).await?;
        if updated.is_some() {
            info!(property_id = id, eco_score = score, "property updated");
        }
        Ok(updated)
    }

    /// Physical removal; deleting an unknown id is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        info!(property_id = id, "property deleted");
        Ok(())
    }

    /// Platform-wide sustainability numbers for the home and browse views.
    pub async fn eco_statistics(&self) -> Result<EcoStatistics, ServiceError> {
        let total = self.store.count().await?;
        let average = self.store.average_eco_score().await?;
        let solar = self
            .store
            .find(&PropertyQuery::SolarPanels(true))
            .await?
            .len() as i64;
        let excellent = self.eco_excellent().await?.len() as i64;
        Ok(EcoStatistics::new(total, average, solar, excellent))
    }
}
