//! Staff page handlers, rendered inside the shared layout

use askama::Template;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{nav_items, NavItem};
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::{format_rupees, QuoteDisplay};
use crate::pricing::PriceTable;
use crate::reservations::{Reservation, ReservationStatus};
use crate::AppState;

/// Reservation count for one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub label: String,
    pub count: usize,
}

/// One line of the rates table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    pub dimension: &'static str,
    pub label: &'static str,
    pub price: String,
}

/// One line of the reservations table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub id: String,
    pub date: String,
    pub guest: String,
    pub room: String,
    pub total: String,
    pub status: String,
}

/// Dashboard template
#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    total: usize,
    status_counts: Vec<StatusCount>,
    has_reservations: bool,
}

/// New booking template
#[derive(Template)]
#[template(path = "pages/create_booking.html")]
struct CreateBookingTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    price_rows: Vec<PriceRow>,
    quote: QuoteDisplay,
}

/// Reservation list template
#[derive(Template)]
#[template(path = "pages/reservations.html")]
struct ReservationsTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    rows: Vec<ReservationRow>,
    has_reservations: bool,
}

/// Dashboard
pub async fn home(State(state): State<AppState>, uri: Uri) -> Result<Html<String>> {
    let reservations = state.reservations.list();

    let template = HomeTemplate {
        title: "Dashboard",
        nav: nav_items(uri.path()),
        total: reservations.len(),
        status_counts: status_counts(&reservations),
        has_reservations: !reservations.is_empty(),
    };

    Ok(Html(template.render()?))
}

/// New booking page with a quote for the query parameters
pub async fn create_booking(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<QuoteRequest>,
) -> Result<Html<String>> {
    let booking = query.into_booking_request();
    let breakdown = state.prices.quote(&booking);

    let template = CreateBookingTemplate {
        title: "New Booking",
        nav: nav_items(uri.path()),
        price_rows: price_rows(&state.prices),
        quote: QuoteDisplay::new(&booking, &breakdown),
    };

    Ok(Html(template.render()?))
}

/// Reservation list, newest first
pub async fn reservations(State(state): State<AppState>, uri: Uri) -> Result<Html<String>> {
    let rows: Vec<ReservationRow> = state
        .reservations
        .list()
        .iter()
        .map(reservation_row)
        .collect();

    let template = ReservationsTemplate {
        title: "Reservations",
        nav: nav_items(uri.path()),
        has_reservations: !rows.is_empty(),
        rows,
    };

    Ok(Html(template.render()?))
}

/// Anything that is not a known page
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Counts per known status, plus any other status seen, in first-seen order
fn status_counts(reservations: &[Reservation]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::CheckedIn,
        ReservationStatus::CheckedOut,
        ReservationStatus::Cancelled,
    ]
    .iter()
    .map(|status| StatusCount {
        label: status.to_string(),
        count: 0,
    })
    .collect();

    for reservation in reservations {
        let label = reservation.status.as_str();
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

fn price_rows(table: &PriceTable) -> Vec<PriceRow> {
    let dimensions = [
        ("Room", table.rooms),
        ("Bed", table.beds),
        ("Breakfast", table.breakfast),
    ];

    dimensions
        .into_iter()
        .flat_map(|(dimension, entries)| {
            entries.iter().map(move |entry| PriceRow {
                dimension,
                label: entry.label,
                price: format_rupees(entry.price),
            })
        })
        .collect()
}

fn reservation_row(reservation: &Reservation) -> ReservationRow {
    let text = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| reservation.detail_str(key))
            .filter(|s| !s.is_empty())
            .unwrap_or("-")
            .to_string()
    };

    let total = reservation
        .details
        .get("totalCost")
        .and_then(Value::as_i64)
        .map(format_rupees)
        .unwrap_or_else(|| "-".to_string());

    ReservationRow {
        id: reservation.id.clone(),
        date: reservation.date.clone(),
        guest: text(&["guestName", "fullName", "name"]),
        room: text(&["roomType", "roomCategory", "room"]),
        total,
        status: reservation.status.to_string(),
    }
}
