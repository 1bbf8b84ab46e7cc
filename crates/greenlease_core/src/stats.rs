//! crates/greenlease_core/src/stats.rs
//!
//! Immutable statistics value objects handed to the presentation layer.
//! Percentages are computed on access so they can never go stale.

use serde::Serialize;

//=========================================================================================
// Feedback statistics
//=========================================================================================

/// Summary of all feedback recorded for one property.
///
/// Unverified submissions count toward `total_count` but are excluded from
/// both averages; the averages come straight from the record store's
/// verified-only aggregate queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatistics {
    total_count: i64,
    verified_count: i64,
    recommended_count: i64,
    average_rating: f64,
    average_eco_rating: f64,
}

impl FeedbackStatistics {
    pub fn new(
        total_count: i64,
        verified_count: i64,
        recommended_count: i64,
        average_rating: f64,
        average_eco_rating: f64,
    ) -> Self {
        Self {
            total_count,
            verified_count,
            recommended_count,
            average_rating,
            average_eco_rating,
        }
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn verified_count(&self) -> i64 {
        self.verified_count
    }

    pub fn recommended_count(&self) -> i64 {
        self.recommended_count
    }

    /// Average overall rating across verified feedback only.
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    /// Average eco rating across verified feedback that provided one.
    pub fn average_eco_rating(&self) -> f64 {
        self.average_eco_rating
    }

    pub fn recommendation_percentage(&self) -> f64 {
        percentage(self.recommended_count, self.total_count)
    }

    pub fn verification_percentage(&self) -> f64 {
        percentage(self.verified_count, self.total_count)
    }
}

//=========================================================================================
// Property eco statistics
//=========================================================================================

/// Platform-wide sustainability numbers for the browse/home views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoStatistics {
    total_properties: i64,
    average_eco_score: f64,
    solar_properties_count: i64,
    excellent_properties_count: i64,
}

impl EcoStatistics {
    pub fn new(
        total_properties: i64,
        average_eco_score: f64,
        solar_properties_count: i64,
        excellent_properties_count: i64,
    ) -> Self {
        Self {
            total_properties,
            average_eco_score,
            solar_properties_count,
            excellent_properties_count,
        }
    }

    pub fn total_properties(&self) -> i64 {
        self.total_properties
    }

    pub fn average_eco_score(&self) -> f64 {
        self.average_eco_score
    }

    pub fn solar_properties_count(&self) -> i64 {
        self.solar_properties_count
    }

    pub fn excellent_properties_count(&self) -> i64 {
        self.excellent_properties_count
    }

    pub fn solar_percentage(&self) -> f64 {
        percentage(self.solar_properties_count, self.total_properties)
    }

    pub fn excellent_percentage(&self) -> f64 {
        percentage(self.excellent_properties_count, self.total_properties)
    }
}

fn percentage(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 * 100.0 / whole as f64
    } else {
        0.0
    }
}
