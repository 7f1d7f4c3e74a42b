//! Work-order lifecycle management for Verger.
//!
//! This module owns the canonical record of a facility request from public
//! submission through review, execution, and completion. The status state
//! machine on the aggregate is the single authority for transitions;
//! repositories persist whatever the aggregate produced and notifiers
//! observe the result. The module follows hexagonal architecture:
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
