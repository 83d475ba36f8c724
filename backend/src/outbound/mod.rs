//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel, plus migrations,
//!   catalog introspection and the relational mapping registry.
//! - **memory**: in-memory repositories applying the same identity and
//!   referential rules, for tests and database-less local runs.
//!
//! Adapters translate between domain entities and storage representations
//! and contain no business rules.

pub mod memory;
pub mod persistence;
