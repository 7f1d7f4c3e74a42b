//! Verger: facilities work-order management core for parish operations.
//!
//! This crate provides the server-side functionality behind a church
//! facilities desk: public request intake and status lookup, an admin
//! workflow over a validated status state machine, per-user task boards,
//! role-based access gating, outbound webhook notifications, a live
//! change feed, and reporting aggregation.
//!
//! # Architecture
//!
//! Verger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, webhooks,
//!   change feed, in-memory doubles)
//!
//! # Modules
//!
//! - [`work_order`]: Request lifecycle from submission to completion
//! - [`personal_task`]: Owner-scoped to-do boards
//! - [`identity`]: Profiles, roles, and access gating
//! - [`analytics`]: Pure reporting aggregation for dashboards
//! - [`config`]: JSON application configuration

pub mod analytics;
pub mod config;
pub mod identity;
pub mod personal_task;
pub mod work_order;
