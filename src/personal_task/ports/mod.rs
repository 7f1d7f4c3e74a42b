//! Port contracts for personal tasks.

pub mod repository;

pub use repository::{
    PersonalTaskRepository, PersonalTaskRepositoryError, PersonalTaskRepositoryResult,
};
