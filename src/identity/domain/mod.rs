//! Domain model for staff identity.
//!
//! Profiles carry the contact identity and coarse role used for
//! authorization gating. No authentication concerns live here; the hosted
//! backend owns credentials, and this crate only reasons about the
//! resulting identity.

mod error;
mod ids;
mod profile;
mod role;

pub use error::{IdentityDomainError, ParseRoleError};
pub use ids::ProfileId;
pub use profile::{PersistedProfileData, Profile};
pub use role::Role;
