//! Profiles and role-based access gating for Verger.
//!
//! This module models the identities that drive authorization decisions:
//! staff profiles with a coarse role, and the pure access policy that
//! mirrors the hosted backend's row-level-security rules. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Access policy in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
