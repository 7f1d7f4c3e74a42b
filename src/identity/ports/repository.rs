//! Repository port for profile persistence and lookup.

use crate::identity::domain::{Profile, ProfileId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::DuplicateProfile`] when the profile
    /// ID already exists or [`ProfileRepositoryError::DuplicateEmail`] when
    /// the email is already registered.
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Finds a profile by identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>>;

    /// Finds a profile by normalized email address.
    ///
    /// Returns `None` when no profile uses the email.
    async fn find_by_email(&self, email: &str) -> ProfileRepositoryResult<Option<Profile>>;

    /// Returns all profiles.
    async fn list_all(&self) -> ProfileRepositoryResult<Vec<Profile>>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(ProfileId),

    /// A profile with the same email already exists.
    #[error("duplicate profile email: {0}")]
    DuplicateEmail(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
