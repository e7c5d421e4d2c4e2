//! Task management core.
//!
//! This module implements the task lifecycle: creating tasks with a
//! store-assigned identifier, listing and reading them, applying partial
//! updates, and deleting them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The storage contract in [`ports`]
//! - In-memory and `PostgreSQL` stores in [`adapters`]
//! - The repository façade in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
