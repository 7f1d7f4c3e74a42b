//! Port contracts for staff identity.

pub mod repository;

pub use repository::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult};
