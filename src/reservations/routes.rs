//! HTTP routes for reservation records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::Reservation;

/// Reservation routes, mounted under `/api/reservations`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(show).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Vec<Reservation>> {
    Json(state.reservations.list())
}

async fn create(
    State(state): State<AppState>,
    Json(details): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Reservation>)> {
    let reservation = state.reservations.add(details)?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Reservation>> {
    state
        .reservations
        .get_by_id(&id)
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Shallow-merge the body into the reservation and return the result
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Reservation>> {
    if !state.reservations.update(&id, fields)? {
        return Err(AppError::NotFound);
    }
    state
        .reservations
        .get_by_id(&id)
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Always 204, whether or not the id existed
async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    state.reservations.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
