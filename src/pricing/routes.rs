//! HTTP routes for the pricing engine.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::AppState;

use super::models::PriceTable;
use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Pricing routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prices", get(prices))
        .route("/api/quote", post(quote))
}

/// Current price table
async fn prices(State(state): State<AppState>) -> Json<PriceTable> {
    Json(state.prices)
}

/// Quote a booking. Never fails once the body is valid JSON.
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let booking = request.into_booking_request();
    let breakdown = state.prices.quote(&booking);
    tracing::debug!(
        room = %booking.room_category,
        nights = breakdown.duration_days,
        total = breakdown.total_cost,
        "Quoted booking"
    );
    Json(QuoteResponse::new(&booking, breakdown))
}
