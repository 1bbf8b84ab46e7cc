pub mod domain;
pub mod eco;
pub mod filter;
pub mod ports;
pub mod stats;

pub use domain::{
    Feedback, FeedbackDraft, Landlord, Property, PropertyDraft, User, UserDraft, ValidationError,
};
pub use eco::{overall_score, rating_display, EcoFactors, EcoTier};
pub use filter::{PropertyFilter, PropertyQuery};
pub use ports::{FeedbackStore, PortError, PortResult, PropertyStore, UserStore};
pub use stats::{EcoStatistics, FeedbackStatistics};
