//! crates/greenlease_core/src/eco.rs
//!
//! The eco-score calculator and its display banding. Everything here is a
//! pure function of its inputs; persistence of the resulting score is the
//! caller's concern.

use serde::{Deserialize, Serialize};

/// The five independent inputs to the overall eco score. An absent factor
/// carries no weight; it is not treated as a zero rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EcoFactors {
    pub insulation_rating: Option<i32>,
    pub solar_rating: Option<i32>,
    pub water_conservation_rating: Option<i32>,
    pub energy_efficiency_rating: Option<i32>,
    /// Distance to the nearest green space, in miles.
    pub green_space_proximity: Option<f64>,
}

/// Computes the weighted composite score, rounded to two decimal places.
///
/// Each rating contributes only when present and positive; proximity
/// contributes whenever present, scored inversely (closer is better).
/// Weights are not renormalized when factors are missing, so partial data
/// yields a strictly lower composite than full data of the same quality.
/// Values are used as given; no clamping to the nominal 0-10 domain.
pub fn overall_score(factors: &EcoFactors) -> f64 {
    let mut total = 0.0;

    // Insulation rating (weight: 20%)
    if let Some(rating) = factors.insulation_rating {
        if rating > 0 {
            total += f64::from(rating) * 0.2;
        }
    }

    // Solar rating (weight: 25%)
    if let Some(rating) = factors.solar_rating {
        if rating > 0 {
            total += f64::from(rating) * 0.25;
        }
    }

    // Water conservation rating (weight: 20%)
    if let Some(rating) = factors.water_conservation_rating {
        if rating > 0 {
            total += f64::from(rating) * 0.2;
        }
    }

    // Energy efficiency rating (weight: 25%)
    if let Some(rating) = factors.energy_efficiency_rating {
        if rating > 0 {
            total += f64::from(rating) * 0.25;
        }
    }

    // Green space proximity (weight: 10%), inverse scoring
    if let Some(miles) = factors.green_space_proximity {
        total += (10.0 - miles).max(0.0) * 0.1;
    }

    (total * 100.0).round() / 100.0
}

/// The labeled score bands used for both display and tier search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcoTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl EcoTier {
    /// Bands a score: 8.0 and up is Excellent, 6.0 Good, 4.0 Fair,
    /// anything lower Poor.
    pub fn of(score: f64) -> Self {
        if score >= 8.0 {
            EcoTier::Excellent
        } else if score >= 6.0 {
            EcoTier::Good
        } else if score >= 4.0 {
            EcoTier::Fair
        } else {
            EcoTier::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EcoTier::Excellent => "Excellent",
            EcoTier::Good => "Good",
            EcoTier::Fair => "Fair",
            EcoTier::Poor => "Poor",
        }
    }

    /// The inclusive score range searched for a tier label, or `None` for a
    /// label that names no tier (callers fall back to the unfiltered
    /// listing). Matching is case-insensitive.
    pub fn search_range(label: &str) -> Option<(f64, f64)> {
        match label.to_ascii_lowercase().as_str() {
            "excellent" => Some((8.0, 10.0)),
            "good" => Some((6.0, 7.9)),
            "fair" => Some((4.0, 5.9)),
            _ => None,
        }
    }
}

/// The display string for a stored score, "Not Rated" when absent.
pub fn rating_display(score: Option<f64>) -> &'static str {
    match score {
        Some(s) => EcoTier::of(s).label(),
        None => "Not Rated",
    }
}
