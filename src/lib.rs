//! Boutique hotel booking desk.
//!
//! Prices bookings from a fixed rate table and keeps reservation records in
//! a single key of a pluggable key/value store, behind an Axum router.

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod reservations;
pub mod routes;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::pricing::PriceTable;
use crate::reservations::ReservationStore;

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub reservations: ReservationStore,
    pub prices: PriceTable,
}

impl AppState {
    /// State with the standard rates
    pub fn new(reservations: ReservationStore) -> Self {
        Self {
            reservations,
            prices: PriceTable::STANDARD,
        }
    }
}

/// Build the application router
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(routes::router())
        .route("/health", get(|| async { "ok" }))
        .merge(pricing::router())
        .nest("/api/reservations", reservations::router())
        .nest_service("/assets", ServeDir::new(static_dir.as_ref()))
        .fallback(routes::pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
