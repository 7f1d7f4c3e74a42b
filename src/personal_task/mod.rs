//! Personal task boards for Verger staff.
//!
//! Lightweight to-do items owned by a single profile. There is no review
//! workflow here: status toggles freely and only the owner may mutate or
//! delete an item. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
