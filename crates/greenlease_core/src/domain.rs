//! crates/greenlease_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or request-handling layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::eco::{self, EcoFactors};

//=========================================================================================
// Validation
//=========================================================================================

/// Rejection reasons for create/update payloads, checked before any
/// derived field is computed or anything reaches the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing or blank")]
    MissingField(&'static str),
    #[error("`{field}` must be between {min} and {max}, got {value}")]
    RatingOutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("username `{0}` is already taken")]
    UsernameTaken(String),
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

//=========================================================================================
// Property
//=========================================================================================

/// A rental listing with its sustainability attributes.
///
/// `overall_eco_score` is derived from the five eco factors at save time and
/// is never set independently by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub rent: Decimal,
    /// apartment, house, condo, etc.
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_footage: Option<f64>,

    // Eco-rating fields
    pub insulation_rating: Option<i32>,
    pub solar_panels: bool,
    pub solar_rating: Option<i32>,
    pub water_conservation_rating: Option<i32>,
    /// Distance to the nearest green space, in miles.
    pub green_space_proximity: Option<f64>,
    pub energy_efficiency_rating: Option<i32>,
    /// Weighted composite of the eco factors, recomputed on every save.
    pub overall_eco_score: Option<f64>,

    pub landlord_id: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// The street address formatted as a single display line.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }

    pub fn eco_factors(&self) -> EcoFactors {
        EcoFactors {
            insulation_rating: self.insulation_rating,
            solar_rating: self.solar_rating,
            water_conservation_rating: self.water_conservation_rating,
            energy_efficiency_rating: self.energy_efficiency_rating,
            green_space_proximity: self.green_space_proximity,
        }
    }

    /// The display band for the stored eco score, "Not Rated" when absent.
    pub fn eco_rating_display(&self) -> &'static str {
        eco::rating_display(self.overall_eco_score)
    }
}

/// The create/update field bag for a [`Property`].
///
/// Text fields arrive as they were typed (a blank form input is an empty
/// string); [`PropertyDraft::validate`] rejects the blanks. Eco factors left
/// out of the form stay absent and carry no weight in the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDraft {
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub rent: Option<Decimal>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_footage: Option<f64>,
    pub insulation_rating: Option<i32>,
    pub solar_panels: bool,
    pub solar_rating: Option<i32>,
    pub water_conservation_rating: Option<i32>,
    pub green_space_proximity: Option<f64>,
    pub energy_efficiency_rating: Option<i32>,
    pub landlord_id: Option<i64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

impl PropertyDraft {
    /// Checks the required listing fields: title, address, city, state,
    /// zip code and rent. Eco factors are optional and are not range-checked
    /// here; out-of-range values propagate into the score arithmetic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("address", &self.address)?;
        require_text("city", &self.city)?;
        require_text("state", &self.state)?;
        require_text("zipCode", &self.zip_code)?;
        if self.rent.is_none() {
            return Err(ValidationError::MissingField("rent"));
        }
        Ok(())
    }

    pub fn eco_factors(&self) -> EcoFactors {
        EcoFactors {
            insulation_rating: self.insulation_rating,
            solar_rating: self.solar_rating,
            water_conservation_rating: self.water_conservation_rating,
            energy_efficiency_rating: self.energy_efficiency_rating,
            green_space_proximity: self.green_space_proximity,
        }
    }
}

//=========================================================================================
// Feedback
//=========================================================================================

/// A tenant review of a property.
///
/// `is_recommended` and `is_verified` are derived once at save time.
/// Verification can later be granted by an administrator but is never
/// automatically revoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub property_id: i64,
    pub tenant_name: Option<String>,
    pub tenant_email: Option<String>,
    /// 1-5 stars.
    pub overall_rating: i32,
    /// 1-5 stars for eco features; absent or 0 means "not provided".
    pub eco_rating: Option<i32>,
    pub comment: Option<String>,
    pub is_verified: bool,
    pub is_recommended: bool,

    // Specific eco-feature ratings, 1-5 stars each
    pub insulation_experience: Option<i32>,
    pub energy_bill_satisfaction: Option<i32>,
    pub solar_system_satisfaction: Option<i32>,
    pub water_efficiency_satisfaction: Option<i32>,
    pub green_space_satisfaction: Option<i32>,

    pub created_at: DateTime<Utc>,
}

/// The submission payload for a [`Feedback`] record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackDraft {
    pub property_id: i64,
    pub tenant_name: Option<String>,
    pub tenant_email: Option<String>,
    pub overall_rating: Option<i32>,
    pub eco_rating: Option<i32>,
    pub comment: Option<String>,
    pub insulation_experience: Option<i32>,
    pub energy_bill_satisfaction: Option<i32>,
    pub solar_system_satisfaction: Option<i32>,
    pub water_efficiency_satisfaction: Option<i32>,
    pub green_space_satisfaction: Option<i32>,
}

impl FeedbackDraft {
    /// Requires an overall rating between 1 and 5. The optional ratings may
    /// be absent or 0 (both mean "not provided") but must not exceed 5.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.overall_rating {
            None => return Err(ValidationError::MissingField("overallRating")),
            Some(r) if !(1..=5).contains(&r) => {
                return Err(ValidationError::RatingOutOfRange {
                    field: "overallRating",
                    value: r,
                    min: 1,
                    max: 5,
                })
            }
            Some(_) => {}
        }
        for (field, value) in [
            ("ecoRating", self.eco_rating),
            ("insulationExperience", self.insulation_experience),
            ("energyBillSatisfaction", self.energy_bill_satisfaction),
            ("solarSystemSatisfaction", self.solar_system_satisfaction),
            ("waterEfficiencySatisfaction", self.water_efficiency_satisfaction),
            ("greenSpaceSatisfaction", self.green_space_satisfaction),
        ] {
            if let Some(v) = value {
                if !(0..=5).contains(&v) {
                    return Err(ValidationError::RatingOutOfRange {
                        field,
                        value: v,
                        min: 0,
                        max: 5,
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether the submission meets the completeness bar for automatic
    /// verification: tenant name, tenant email, overall rating and a
    /// non-blank comment are all present. Rating value does not matter.
    pub fn qualifies_for_verification(&self) -> bool {
        self.tenant_name.is_some()
            && self.tenant_email.is_some()
            && self.overall_rating.is_some()
            && self
                .comment
                .as_deref()
                .is_some_and(|c| !c.trim().is_empty())
    }

    /// A review with 4 or more stars recommends the property.
    pub fn is_recommended(&self) -> bool {
        self.overall_rating.is_some_and(|r| r >= 4)
    }
}

//=========================================================================================
// User
//=========================================================================================

/// A platform account. Passwords are stored pre-hashed and are opaque to
/// this crate; authentication mechanics live outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
    pub enabled: bool,
}

/// Registration payload for a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub username: String,
    /// Already hashed by the caller.
    pub password: String,
    pub email: String,
    pub role: Option<String>,
}

impl UserDraft {
    pub const MIN_PASSWORD_LEN: usize = 6;

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("username", &self.username)?;
        require_text("email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        if self.password.len() < Self::MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

//=========================================================================================
// Landlord
//=========================================================================================

/// A property owner. The sustainability score is the average eco score of
/// the landlord's properties, maintained outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landlord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub is_verified: bool,
    pub sustainability_score: Option<f64>,
    pub total_properties: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Landlord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Display band for the landlord's sustainability score.
    pub fn sustainability_level(&self) -> &'static str {
        match self.sustainability_score {
            None => "Not Rated",
            Some(s) if s >= 8.0 => "Eco Champion",
            Some(s) if s >= 6.0 => "Green Leader",
            Some(s) if s >= 4.0 => "Eco Friendly",
            Some(_) => "Standard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_property_draft() -> PropertyDraft {
        PropertyDraft {
            title: "Sunny Loft".to_string(),
            address: "12 Pine St".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip_code: "97201".to_string(),
            rent: Some(Decimal::new(1850, 0)),
            ..PropertyDraft::default()
        }
    }

    #[test]
    fn property_draft_accepts_complete_required_fields() {
        assert!(valid_property_draft().validate().is_ok());
    }

    #[test]
    fn property_draft_rejects_blank_title() {
        let draft = PropertyDraft {
            title: "   ".to_string(),
            ..valid_property_draft()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn property_draft_rejects_missing_rent() {
        let draft = PropertyDraft {
            rent: None,
            ..valid_property_draft()
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("rent")));
    }

    #[test]
    fn feedback_draft_requires_overall_rating() {
        let draft = FeedbackDraft {
            property_id: 1,
            ..FeedbackDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("overallRating"))
        );
    }

    #[test]
    fn feedback_draft_rejects_six_star_rating() {
        let draft = FeedbackDraft {
            property_id: 1,
            overall_rating: Some(6),
            ..FeedbackDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::RatingOutOfRange {
                field: "overallRating",
                value: 6,
                ..
            })
        ));
    }

    #[test]
    fn feedback_draft_allows_zero_as_not_provided_eco_rating() {
        let draft = FeedbackDraft {
            property_id: 1,
            overall_rating: Some(4),
            eco_rating: Some(0),
            ..FeedbackDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn complete_submission_qualifies_for_verification() {
        let draft = FeedbackDraft {
            property_id: 1,
            tenant_name: Some("Jane".to_string()),
            tenant_email: Some("jane@x.com".to_string()),
            overall_rating: Some(5),
            comment: Some("Great place".to_string()),
            ..FeedbackDraft::default()
        };
        assert!(draft.qualifies_for_verification());
        assert!(draft.is_recommended());
    }

    #[test]
    fn three_star_submission_verifies_but_does_not_recommend() {
        let draft = FeedbackDraft {
            property_id: 1,
            tenant_name: Some("Jane".to_string()),
            tenant_email: Some("jane@x.com".to_string()),
            overall_rating: Some(3),
            comment: Some("Decent enough".to_string()),
            ..FeedbackDraft::default()
        };
        assert!(draft.qualifies_for_verification());
        assert!(!draft.is_recommended());
    }

    #[test]
    fn blank_comment_blocks_auto_verification() {
        let draft = FeedbackDraft {
            property_id: 1,
            tenant_name: Some("Jane".to_string()),
            tenant_email: Some("jane@x.com".to_string()),
            overall_rating: Some(5),
            comment: Some("   ".to_string()),
            ..FeedbackDraft::default()
        };
        assert!(!draft.qualifies_for_verification());
    }

    #[test]
    fn user_draft_rejects_short_password() {
        let draft = UserDraft {
            username: "jane".to_string(),
            password: "abc".to_string(),
            email: "jane@x.com".to_string(),
            role: None,
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn landlord_sustainability_bands() {
        let mut landlord = Landlord {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Green".to_string(),
            email: "ada@x.com".to_string(),
            phone: None,
            company: None,
            is_verified: true,
            sustainability_score: None,
            total_properties: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(landlord.sustainability_level(), "Not Rated");
        landlord.sustainability_score = Some(8.2);
        assert_eq!(landlord.sustainability_level(), "Eco Champion");
        landlord.sustainability_score = Some(6.0);
        assert_eq!(landlord.sustainability_level(), "Green Leader");
        landlord.sustainability_score = Some(4.5);
        assert_eq!(landlord.sustainability_level(), "Eco Friendly");
        landlord.sustainability_score = Some(3.9);
        assert_eq!(landlord.sustainability_level(), "Standard");
        assert_eq!(landlord.full_name(), "Ada Green");
    }
}
