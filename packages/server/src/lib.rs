#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the vector map application.
//!
//! Serves the zone/hotspot map scene as `GeoJSON`, the grid heatmap layers,
//! zone detail panels and the analytics dashboard. The fixtures and the
//! seeded grid layer set are built once at startup and shared read-only
//! across workers; view state arrives with each request as query
//! parameters.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use vector_map_fixtures::{FixtureError, Fixtures};
use vector_map_grid::{DEFAULT_SEED, GridLayerSet};

/// Shared application state.
pub struct AppState {
    /// The demo dataset.
    pub fixtures: Fixtures,
    /// Grid layers generated at startup.
    pub grids: GridLayerSet,
}

impl AppState {
    /// Loads the fixtures and generates the grid layers from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the embedded fixtures are invalid.
    pub fn load(seed: u64) -> Result<Self, FixtureError> {
        let fixtures = Fixtures::load()?;
        let grids = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, seed);
        Ok(Self { fixtures, grids })
    }
}

/// Reads the grid seed from `GRID_SEED`, falling back to [`DEFAULT_SEED`].
#[must_use]
pub fn grid_seed_from_env() -> u64 {
    match std::env::var("GRID_SEED") {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid GRID_SEED {raw:?}, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        Err(_) => DEFAULT_SEED,
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/stats", web::get().to(handlers::stats))
            .route("/layers", web::get().to(handlers::layers))
            .route("/basemaps", web::get().to(handlers::basemaps))
            .route("/locations", web::get().to(handlers::locations))
            .route("/map", web::get().to(handlers::map))
            .route("/grid/{layer_id}", web::get().to(handlers::grid))
            .route("/zones/{zone_id}", web::get().to(handlers::zone))
            .route("/analytics", web::get().to(handlers::analytics)),
    );
}

/// Starts the vector map API server.
///
/// Loads the fixtures, generates the grid layers from `seed`, and
/// binds to `BIND_ADDR:PORT` (default `127.0.0.1:8080`). The caller
/// initializes logging and provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the fixtures fail to load, or the
/// HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(seed: u64) -> std::io::Result<()> {
    log::info!("Loading fixtures and generating grid layers (seed {seed})...");
    let state = web::Data::new(AppState::load(seed).map_err(std::io::Error::other)?);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_uses_requested_seed() {
        let state = AppState::load(7).unwrap();
        let fixtures = Fixtures::embedded();
        let expected = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, 7);
        assert_eq!(state.grids.layers(), expected.layers());
    }
}
