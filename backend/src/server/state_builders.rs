//! Builders for the HTTP state from the configured persistence backend.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryStore;
use backend::outbound::persistence::{
    DbPool, DieselFoodTruckRepository, DieselLocationRepository,
    DieselSocialMediaPlatformRepository, DieselTagRepository,
};

use super::{Persistence, ServerConfig};

/// Wire the services over Diesel repositories when a pool is configured,
/// otherwise over a fresh in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.persistence {
        Persistence::Postgres(pool) => {
            info!("using PostgreSQL repositories");
            diesel_state(pool, clock)
        }
        Persistence::InMemory => {
            warn!("no database configured; using the in-memory store");
            memory_state(&InMemoryStore::new(), clock)
        }
    };
    web::Data::new(state)
}

fn diesel_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    HttpState::from_repositories(
        Arc::new(DieselFoodTruckRepository::new(pool.clone())),
        Arc::new(DieselTagRepository::new(pool.clone())),
        Arc::new(DieselLocationRepository::new(pool.clone())),
        Arc::new(DieselSocialMediaPlatformRepository::new(pool.clone())),
        clock,
    )
}

fn memory_state(store: &InMemoryStore, clock: Arc<dyn Clock>) -> HttpState {
    HttpState::from_repositories(
        Arc::new(store.food_trucks()),
        Arc::new(store.tags()),
        Arc::new(store.locations()),
        Arc::new(store.social_media_platforms()),
        clock,
    )
}
