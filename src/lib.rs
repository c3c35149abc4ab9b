pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router. Shared between `main` and the tests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::services::list_services))
        .route("/api/services", post(handlers::services::create_service))
        .route("/api/services/:id", get(handlers::services::get_service))
        .route("/api/services/:id", put(handlers::services::update_service))
        .route(
            "/api/services/:id",
            delete(handlers::services::delete_service),
        )
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route("/api/bookings/:id", put(handlers::bookings::update_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
