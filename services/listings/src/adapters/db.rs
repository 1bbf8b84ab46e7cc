//! services/listings/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete
//! implementation of the record-store ports from the `greenlease_core`
//! crate. It handles all interactions with the PostgreSQL database using
//! `sqlx`. Queries are checked at runtime so the crate builds without a
//! live database; schema provisioning is outside this crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

use greenlease_core::domain::{Feedback, FeedbackDraft, Property, PropertyDraft, User, UserDraft};
use greenlease_core::filter::PropertyQuery;
use greenlease_core::ports::{FeedbackStore, PortError, PortResult, PropertyStore, UserStore};

use crate::config::Config;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the record-store ports.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new `PgStore` around an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool from the loaded configuration.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Constraint violations are surfaced separately so callers can tell a
/// rejected write from a failing store.
fn to_port_error(e: sqlx::Error) -> PortError {
    match e {
        sqlx::Error::Database(db) if db.constraint().is_some() => {
            PortError::Constraint(db.to_string())
        }
        other => PortError::Store(other.to_string()),
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct PropertyRow {
    id: i64,
    title: String,
    description: Option<String>,
    address: String,
    city: String,
    state: String,
    zip_code: String,
    rent: Decimal,
    property_type: Option<String>,
    bedrooms: Option<i32>,
    bathrooms: Option<i32>,
    square_footage: Option<f64>,
    insulation_rating: Option<i32>,
    solar_panels: bool,
    solar_rating: Option<i32>,
    water_conservation_rating: Option<i32>,
    green_space_proximity: Option<f64>,
    energy_efficiency_rating: Option<i32>,
    overall_eco_score: Option<f64>,
    landlord_id: i64,
    image_url: Option<String>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PropertyRow {
    fn to_domain(self) -> Property {
        Property {
            id: self.id,
            title: self.title,
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            rent: self.rent,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_footage: self.square_footage,
            insulation_rating: self.insulation_rating,
            solar_panels: self.solar_panels,
            solar_rating: self.solar_rating,
            water_conservation_rating: self.water_conservation_rating,
            green_space_proximity: self.green_space_proximity,
            energy_efficiency_rating: self.energy_efficiency_rating,
            overall_eco_score: self.overall_eco_score,
            landlord_id: self.landlord_id,
            image_url: self.image_url,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(FromRow)]
struct FeedbackRow {
    id: i64,
    property_id: i64,
    tenant_name: Option<String>,
    tenant_email: Option<String>,
    overall_rating: i32,
    eco_rating: Option<i32>,
    comment: Option<String>,
    is_verified: bool,
    is_recommended: bool,
    insulation_experience: Option<i32>,
    energy_bill_satisfaction: Option<i32>,
    solar_system_satisfaction: Option<i32>,
    water_efficiency_satisfaction: Option<i32>,
    green_space_satisfaction: Option<i32>,
    created_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn to_domain(self) -> Feedback {
        Feedback {
            id: self.id,
            property_id: self.property_id,
            tenant_name: self.tenant_name,
            tenant_email: self.tenant_email,
            overall_rating: self.overall_rating,
            eco_rating: self.eco_rating,
            comment: self.comment,
            is_verified: self.is_verified,
            is_recommended: self.is_recommended,
            insulation_experience: self.insulation_experience,
            energy_bill_satisfaction: self.energy_bill_satisfaction,
            solar_system_satisfaction: self.solar_system_satisfaction,
            water_efficiency_satisfaction: self.water_efficiency_satisfaction,
            green_space_satisfaction: self.green_space_satisfaction,
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    email: String,
    role: String,
    enabled: bool,
}

impl UserRow {
    fn to_domain(self) -> User {
        User {
            id: self.id,
            username: self.username,
            password: self.password,
            email: self.email,
            role: self.role,
            enabled: self.enabled,
        }
    }
}

//=========================================================================================
// `PropertyStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl PropertyStore for PgStore {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(row.map(PropertyRow::to_domain))
    }

    async fn find_all(&self) -> PortResult<Vec<Property>> {
        let rows = sqlx::query_as::<_, PropertyRow>(
            "SELECT * FROM properties ORDER BY overall_eco_score DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(rows.into_iter().map(PropertyRow::to_domain).collect())
    }

    async fn find(&self, query: &PropertyQuery) -> PortResult<Vec<Property>> {
        let rows = match query {
            PropertyQuery::City(city) => {
                sqlx::query_as::<_, PropertyRow>(
                    "SELECT * FROM properties \
                     WHERE LOWER(city) LIKE LOWER($1) AND is_available = TRUE \
                     ORDER BY overall_eco_score DESC",
                )
                .bind(format!("%{city}%"))
                .fetch_all(&self.pool)
                .await
            }
            PropertyQuery::RentRange(min, max) => {
                sqlx::query_as::<_, PropertyRow>(
                    "SELECT * FROM properties \
                     WHERE rent BETWEEN $1 AND $2 AND is_available = TRUE \
                     ORDER BY overall_eco_score DESC",
                )
                .bind(*min)
                .bind(*max)
                .fetch_all(&self.pool)
                .await
            }
            PropertyQuery::EcoScoreRange(min, max) => {
                sqlx::query_as::<_, PropertyRow>(
                    "SELECT * FROM properties \
                     WHERE overall_eco_score BETWEEN $1 AND $2 AND is_available = TRUE \
                     ORDER BY overall_eco_score DESC",
                )
                .bind(*min)
                .bind(*max)
                .fetch_all(&self.pool)
                .await
            }
            PropertyQuery::SolarPanels(has_solar) => {
                sqlx::query_as::<_, PropertyRow>(
                    "SELECT * FROM properties \
                     WHERE solar_panels = $1 AND is_available = TRUE \
                     ORDER BY overall_eco_score DESC",
                )
                .bind(*has_solar)
                .fetch_all(&self.pool)
                .await
            }
            PropertyQuery::Available => {
                sqlx::query_as::<_, PropertyRow>(
                    "SELECT * FROM properties WHERE is_available = TRUE \
                     ORDER BY overall_eco_score DESC, created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(to_port_error)?;
        Ok(rows.into_iter().map(PropertyRow::to_domain).collect())
    }

    async fn insert(
        &self,
        draft: &PropertyDraft,
        overall_eco_score: f64,
    ) -> PortResult<Property> {
        let row = sqlx::query_as::<_, PropertyRow>(
            "INSERT INTO properties (title, description, address, city, state, zip_code, rent, \
                                     property_type, bedrooms, bathrooms, square_footage, \
                                     insulation_rating, solar_panels, solar_rating, \
                                     water_conservation_rating, green_space_proximity, \
                                     energy_efficiency_rating, overall_eco_score, \
                                     landlord_id, image_url, is_available, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
                     $18, $19, $20, $21, NOW(), NOW()) \
             RETURNING *",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.address)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.zip_code)
        .bind(draft.rent)
        .bind(&draft.property_type)
        .bind(draft.bedrooms)
        .bind(draft.bathrooms)
        .bind(draft.square_footage)
        .bind(draft.insulation_rating)
        .bind(draft.solar_panels)
        .bind(draft.solar_rating)
        .bind(draft.water_conservation_rating)
        .bind(draft.green_space_proximity)
        .bind(draft.energy_efficiency_rating)
        .bind(overall_eco_score)
        .bind(draft.landlord_id)
        .bind(&draft.image_url)
        .bind(draft.is_available.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(row.to_domain())
    }

    async fn update(
        &self,
        id: i64,
        draft: &PropertyDraft,
        overall_eco_score: f64,
    ) -> PortResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(
            "UPDATE properties SET title = $1, description = $2, address = $3, city = $4, \
                                   state = $5, zip_code = $6, rent = $7, property_type = $8, \
                                   bedrooms = $9, bathrooms = $10, square_footage = $11, \
                                   insulation_rating = $12, solar_panels = $13, \
                                   solar_rating = $14, water_conservation_rating = $15, \
                                   green_space_proximity = $16, energy_efficiency_rating = $17, \
                                   overall_eco_score = $18, landlord_id = $19, image_url = $20, \
                                   is_available = $21, updated_at = NOW() \
             WHERE id = $22 \
             RETURNING *",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.address)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.zip_code)
        .bind(draft.rent)
        .bind(&draft.property_type)
        .bind(draft.bedrooms)
        .bind(draft.bathrooms)
        .bind(draft.square_footage)
        .bind(draft.insulation_rating)
        .bind(draft.solar_panels)
        .bind(draft.solar_rating)
        .bind(draft.water_conservation_rating)
        .bind(draft.green_space_proximity)
        .bind(draft.energy_efficiency_rating)
        .bind(overall_eco_score)
        .bind(draft.landlord_id)
        .bind(&draft.image_url)
        .bind(draft.is_available.unwrap_or(true))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(row.map(PropertyRow::to_domain))
    }

    async fn delete(&self, id: i64) -> PortResult<()> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(())
    }

    async fn count(&self) -> PortResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)
    }

    async fn average_eco_score(&self) -> PortResult<f64> {
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(overall_eco_score)::DOUBLE PRECISION FROM properties \
             WHERE overall_eco_score > 0",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(average.unwrap_or(0.0))
    }
}

//=========================================================================================
// `FeedbackStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl FeedbackStore for PgStore {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<Feedback>> {
        let row = sqlx::query_as::<_, FeedbackRow>("SELECT * FROM feedback WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(row.map(FeedbackRow::to_domain))
    }

    async fn find_all(&self) -> PortResult<Vec<Feedback>> {
        let rows =
            sqlx::query_as::<_, FeedbackRow>("SELECT * FROM feedback ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(to_port_error)?;
        Ok(rows.into_iter().map(FeedbackRow::to_domain).collect())
    }

    async fn find_by_property(&self, property_id: i64) -> PortResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedback WHERE property_id = $1 ORDER BY created_at DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(rows.into_iter().map(FeedbackRow::to_domain).collect())
    }

    async fn find_verified(&self) -> PortResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedback WHERE is_verified = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(rows.into_iter().map(FeedbackRow::to_domain).collect())
    }

    async fn insert(
        &self,
        draft: &FeedbackDraft,
        verified: bool,
        recommended: bool,
    ) -> PortResult<Feedback> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            "INSERT INTO feedback (property_id, tenant_name, tenant_email, overall_rating, \
                                   eco_rating, comment, is_verified, is_recommended, \
                                   insulation_experience, energy_bill_satisfaction, \
                                   solar_system_satisfaction, water_efficiency_satisfaction, \
                                   green_space_satisfaction, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW()) \
             RETURNING *",
        )
        .bind(draft.property_id)
        .bind(&draft.tenant_name)
        .bind(&draft.tenant_email)
        .bind(draft.overall_rating)
        .bind(draft.eco_rating)
        .bind(&draft.comment)
        .bind(verified)
        .bind(recommended)
        .bind(draft.insulation_experience)
        .bind(draft.energy_bill_satisfaction)
        .bind(draft.solar_system_satisfaction)
        .bind(draft.water_efficiency_satisfaction)
        .bind(draft.green_space_satisfaction)
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(row.to_domain())
    }

    async fn mark_verified(&self, id: i64) -> PortResult<Option<Feedback>> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            "UPDATE feedback SET is_verified = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(row.map(FeedbackRow::to_domain))
    }

    async fn delete(&self, id: i64) -> PortResult<()> {
        sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(())
    }

    async fn count_for_property(&self, property_id: i64) -> PortResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback WHERE property_id = $1")
            .bind(property_id)
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)
    }

    async fn average_rating_for_property(&self, property_id: i64) -> PortResult<f64> {
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(overall_rating)::DOUBLE PRECISION FROM feedback \
             WHERE property_id = $1 AND is_verified = TRUE",
        )
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(average.unwrap_or(0.0))
    }

    async fn average_eco_rating_for_property(&self, property_id: i64) -> PortResult<f64> {
        // NULL and 0 both mean "not provided"; the > 0 predicate excludes
        // them from the average in one stroke.
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(eco_rating)::DOUBLE PRECISION FROM feedback \
             WHERE property_id = $1 AND is_verified = TRUE AND eco_rating > 0",
        )
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(average.unwrap_or(0.0))
    }
}

//=========================================================================================
// `UserStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_id(&self, id: i64) -> PortResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(row.map(UserRow::to_domain))
    }

    async fn find_by_username(&self, username: &str) -> PortResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(row.map(UserRow::to_domain))
    }

    async fn exists_by_username(&self, username: &str) -> PortResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)
    }

    async fn insert(&self, draft: &UserDraft) -> PortResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password, email, role, enabled) \
             VALUES ($1, $2, $3, $4, TRUE) \
             RETURNING *",
        )
        .bind(&draft.username)
        .bind(&draft.password)
        .bind(&draft.email)
        .bind(draft.role.as_deref().unwrap_or("USER"))
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(row.to_domain())
    }
}
