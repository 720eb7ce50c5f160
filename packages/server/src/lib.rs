#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the market map estimator.
//!
//! Exposes the two estimation steps as stateless RPCs: `POST
//! /api/service-area` geocodes a target city and partitions the city
//! dataset into service rings, and `POST /api/revenue` projects annual
//! jobs and revenue over a service area the client holds from step 1.
//! Nothing is persisted; the only shared state is the read-only city
//! dataset loaded at startup.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use market_map_climate::ClimateTable;
use market_map_geography::CityDataset;

/// Environment variable naming the geocoding API key. Checked per
/// request so a missing key is a request-level configuration error, not
/// a startup crash.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Default on-disk location of the city dataset.
pub const DEFAULT_CITIES_PATH: &str = "data/us-cities.json";

/// Shared application state.
pub struct AppState {
    /// The city dataset, loaded once and read concurrently.
    pub dataset: Arc<CityDataset>,
    /// Climate zone lookup table.
    pub climate: ClimateTable,
    /// Shared HTTP client for outbound geocoding calls.
    pub client: reqwest::Client,
    /// Geocoding endpoint (overridable for tests).
    pub geocoder_base_url: String,
}

/// Starts the market map API server.
///
/// Loads the city dataset (path from `CITIES_DATA_PATH`, defaulting to
/// `data/us-cities.json`) and starts the Actix-Web HTTP server. This is
/// a regular async function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the city dataset is missing or unparseable. The dataset
/// ships with the system, so this only fires on a broken deployment.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cities_path = std::env::var("CITIES_DATA_PATH")
        .unwrap_or_else(|_| DEFAULT_CITIES_PATH.to_string());

    log::info!("Loading city dataset from {cities_path}...");
    let dataset = CityDataset::load(Path::new(&cities_path)).expect("Failed to load city dataset");

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
        climate: ClimateTable::builtin(),
        client: reqwest::Client::new(),
        geocoder_base_url: market_map_geocoder::DEFAULT_BASE_URL.to_string(),
    });

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
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/service-area", web::post().to(handlers::service_area))
                    .route("/revenue", web::post().to(handlers::revenue)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
