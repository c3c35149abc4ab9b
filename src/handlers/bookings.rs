use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{Booking, BookingPatch, NewBooking};
use crate::state::AppState;

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.store.list_bookings())
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    state
        .store
        .get_booking(&id)
        .map(Json)
        .ok_or(AppError::NotFound("booking"))
}

// POST /api/bookings
//
// No overlap check against existing bookings; any (service, date, time)
// combination is accepted, including one already taken.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBooking>,
) -> (StatusCode, Json<Booking>) {
    let created = state.store.create_booking(body);
    tracing::info!(
        id = %created.id,
        service = %created.service_name,
        date = %created.date,
        time = %created.time,
        status = created.status.as_str(),
        "booking created"
    );
    (StatusCode::CREATED, Json(created))
}

// PUT /api/bookings/:id
//
// Status transitions are unrestricted; bookings are never hard-deleted.
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<Booking>, AppError> {
    state
        .store
        .update_booking(&id, patch)
        .map(Json)
        .ok_or(AppError::NotFound("booking"))
}
