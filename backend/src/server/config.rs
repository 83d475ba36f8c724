//! Listener address and persistence backend chosen at startup.

use std::net::SocketAddr;

use backend::outbound::persistence::DbPool;

/// Where the repositories keep their rows.
#[derive(Clone)]
pub enum Persistence {
    /// Diesel repositories over a migrated, validated PostgreSQL pool.
    Postgres(DbPool),
    /// Process-local store; contents are lost on shutdown.
    InMemory,
}

/// Everything `create_server` needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) persistence: Persistence,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, persistence: Persistence) -> Self {
        Self {
            bind_addr,
            persistence,
        }
    }
}
