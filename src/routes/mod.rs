//! Page routes

pub mod pages;

use axum::{routing::get, Router};

use crate::AppState;

/// Staff pages, all rendered inside the shared layout
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/home.html", get(pages::home))
        .route("/create-booking.html", get(pages::create_booking))
        .route("/reservations.html", get(pages::reservations))
}
