//! In-memory repository for profile tests and local mode.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{Profile, ProfileId},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<InMemoryProfileState>>,
}

#[derive(Debug, Default)]
struct InMemoryProfileState {
    profiles: HashMap<ProfileId, Profile>,
    email_index: HashMap<String, ProfileId>,
    insertion_order: Vec<ProfileId>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ProfileRepositoryError {
    ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.profiles.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::DuplicateProfile(profile.id()));
        }
        if state.email_index.contains_key(profile.email()) {
            return Err(ProfileRepositoryError::DuplicateEmail(
                profile.email().to_owned(),
            ));
        }

        state
            .email_index
            .insert(profile.email().to_owned(), profile.id());
        state.insertion_order.push(profile.id());
        state.profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.profiles.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> ProfileRepositoryResult<Option<Profile>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let normalized = email.trim().to_ascii_lowercase();
        let profile = state
            .email_index
            .get(&normalized)
            .and_then(|id| state.profiles.get(id))
            .cloned();
        Ok(profile)
    }

    async fn list_all(&self) -> ProfileRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.profiles.get(id).cloned())
            .collect())
    }
}
