use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{NewService, Service, ServicePatch};
use crate::state::AppState;

// GET /api/services
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.store.list_services())
}

// GET /api/services/:id
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    state
        .store
        .get_service(&id)
        .map(Json)
        .ok_or(AppError::NotFound("service"))
}

// POST /api/services
//
// The payload is trusted as given; there is no server-side validation layer.
pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewService>,
) -> (StatusCode, Json<Service>) {
    let created = state.store.create_service(body);
    tracing::info!(id = %created.id, name = %created.name, "service created");
    (StatusCode::CREATED, Json(created))
}

// PUT /api/services/:id
pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<Service>, AppError> {
    state
        .store
        .update_service(&id, patch)
        .map(Json)
        .ok_or(AppError::NotFound("service"))
}

// DELETE /api/services/:id
pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    let removed = state
        .store
        .delete_service(&id)
        .ok_or(AppError::NotFound("service"))?;
    tracing::info!(id = %removed.id, name = %removed.name, "service deleted");
    Ok(Json(removed))
}
