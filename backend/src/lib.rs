//! Food truck directory backend.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the entities,
//! services and ports; [`inbound`] adapts HTTP requests onto the driving
//! ports; [`outbound`] implements the repository ports over PostgreSQL or
//! an in-memory store.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod test_support;
