//! Task manager: a JSON-over-HTTP service for managing tasks.
//!
//! Tasks carry a title, a description, and a `TODO`/`DONE` status. They can
//! be created, listed, read, partially updated, and deleted, and are held
//! either in memory or in `PostgreSQL`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types and validation with no infrastructure
//!   dependencies
//! - **Ports**: The [`task::ports::TaskStore`] storage contract
//! - **Adapters**: In-memory and `PostgreSQL` store implementations
//!
//! # Modules
//!
//! - [`task`]: Task entity, store contract, stores, and repository façade
//! - [`api`]: HTTP routes and error mapping
//! - [`config`]: Environment-driven configuration

pub mod api;
pub mod config;
pub mod task;
