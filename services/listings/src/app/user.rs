//! services/listings/src/app/user.rs
//!
//! Application service for platform accounts. Existence and uniqueness
//! checks only; credential hashing and session handling live outside this
//! crate.

use std::sync::Arc;

use tracing::info;

use greenlease_core::domain::{User, UserDraft, ValidationError};
use greenlease_core::ports::UserStore;

use crate::error::ServiceError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Registers an account after checking the username is free. The store's
    /// unique constraint remains the backstop for concurrent registrations.
    pub async fn register(&self, mut draft: UserDraft) -> Result<User, ServiceError> {
        draft.validate()?;
        if self.store.exists_by_username(&draft.username).await? {
            return Err(ValidationError::UsernameTaken(draft.username).into());
        }
        if draft.role.is_none() {
            draft.role = Some("USER".to_string());
        }
        let user = self.store.insert(&draft).await?;
        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.store.find_by_username(username).await?)
    }
}
