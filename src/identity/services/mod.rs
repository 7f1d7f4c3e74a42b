//! Access policy services for staff identity.

mod access;

pub use access::{AccessDenied, AccessPolicy, Capability};
