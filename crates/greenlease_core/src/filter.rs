//! crates/greenlease_core/src/filter.rs
//!
//! Translates incoming browse/search parameters into a single selection
//! mode. Exactly one filter wins per request; the rules are evaluated in a
//! fixed priority order and combining filters is unsupported by design.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::eco::EcoTier;

/// The raw parameter bag of a browse request. Every field is optional; the
/// parameters a request leaves out simply never match a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub min_rent: Option<Decimal>,
    pub max_rent: Option<Decimal>,
    pub min_eco_score: Option<f64>,
    pub max_eco_score: Option<f64>,
    pub solar_panels: Option<bool>,
}

/// The resolved selection mode a store query is built from.
///
/// Every mode except `Available` sorts by descending eco score; the
/// unfiltered listing adds descending creation time as a tiebreak.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyQuery {
    /// Case-insensitive substring match on city, available listings only.
    City(String),
    /// Inclusive rent range over available listings.
    RentRange(Decimal, Decimal),
    /// Inclusive eco-score range over available listings.
    EcoScoreRange(f64, f64),
    /// Solar-panel presence or absence, available listings only.
    SolarPanels(bool),
    /// Fallback: every available listing.
    Available,
}

type Rule = fn(&PropertyFilter) -> Option<PropertyQuery>;

// Priority order: city, rent range, eco-score range, solar flag.
const RULES: [Rule; 4] = [city_rule, rent_rule, eco_score_rule, solar_rule];

impl PropertyFilter {
    /// Picks the selection mode: the first applicable rule wins, and a
    /// request matching no rule falls back to the full available listing.
    pub fn resolve(&self) -> PropertyQuery {
        RULES
            .iter()
            .find_map(|rule| rule(self))
            .unwrap_or(PropertyQuery::Available)
    }
}

fn city_rule(filter: &PropertyFilter) -> Option<PropertyQuery> {
    filter
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(|city| PropertyQuery::City(city.to_string()))
}

fn rent_rule(filter: &PropertyFilter) -> Option<PropertyQuery> {
    match (filter.min_rent, filter.max_rent) {
        (Some(min), Some(max)) => Some(PropertyQuery::RentRange(min, max)),
        _ => None,
    }
}

fn eco_score_rule(filter: &PropertyFilter) -> Option<PropertyQuery> {
    match (filter.min_eco_score, filter.max_eco_score) {
        (Some(min), Some(max)) => Some(PropertyQuery::EcoScoreRange(min, max)),
        _ => None,
    }
}

fn solar_rule(filter: &PropertyFilter) -> Option<PropertyQuery> {
    filter.solar_panels.map(PropertyQuery::SolarPanels)
}

impl PropertyQuery {
    /// The named-tier search entry point: "excellent", "good" and "fair" map
    /// onto their score ranges, any other label falls back to the full
    /// available listing.
    pub fn for_tier(label: &str) -> PropertyQuery {
        match EcoTier::search_range(label) {
            Some((min, max)) => PropertyQuery::EcoScoreRange(min, max),
            None => PropertyQuery::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_falls_back_to_available() {
        assert_eq!(PropertyFilter::default().resolve(), PropertyQuery::Available);
    }

    #[test]
    fn city_wins_over_every_other_parameter() {
        let filter = PropertyFilter {
            city: Some("Portland".to_string()),
            min_rent: Some(Decimal::new(500, 0)),
            max_rent: Some(Decimal::new(2000, 0)),
            min_eco_score: Some(6.0),
            max_eco_score: Some(10.0),
            solar_panels: Some(true),
        };
        assert_eq!(
            filter.resolve(),
            PropertyQuery::City("Portland".to_string())
        );
    }

    #[test]
    fn blank_city_does_not_match() {
        let filter = PropertyFilter {
            city: Some("   ".to_string()),
            solar_panels: Some(false),
            ..PropertyFilter::default()
        };
        assert_eq!(filter.resolve(), PropertyQuery::SolarPanels(false));
    }

    #[test]
    fn rent_range_needs_both_bounds() {
        let filter = PropertyFilter {
            min_rent: Some(Decimal::new(500, 0)),
            min_eco_score: Some(4.0),
            max_eco_score: Some(8.0),
            ..PropertyFilter::default()
        };
        assert_eq!(filter.resolve(), PropertyQuery::EcoScoreRange(4.0, 8.0));
    }

    #[test]
    fn rent_range_outranks_eco_score_range() {
        let filter = PropertyFilter {
            min_rent: Some(Decimal::new(500, 0)),
            max_rent: Some(Decimal::new(2000, 0)),
            min_eco_score: Some(4.0),
            max_eco_score: Some(8.0),
            ..PropertyFilter::default()
        };
        assert_eq!(
            filter.resolve(),
            PropertyQuery::RentRange(Decimal::new(500, 0), Decimal::new(2000, 0))
        );
    }

    #[test]
    fn solar_flag_alone_selects_solar_mode() {
        let filter = PropertyFilter {
            solar_panels: Some(true),
            ..PropertyFilter::default()
        };
        assert_eq!(filter.resolve(), PropertyQuery::SolarPanels(true));
    }

    #[test]
    fn tier_labels_map_to_score_ranges() {
        assert_eq!(
            PropertyQuery::for_tier("good"),
            PropertyQuery::EcoScoreRange(6.0, 7.9)
        );
        assert_eq!(
            PropertyQuery::for_tier("Excellent"),
            PropertyQuery::EcoScoreRange(8.0, 10.0)
        );
        assert_eq!(
            PropertyQuery::for_tier("unknown-value"),
            PropertyQuery::Available
        );
    }
}
