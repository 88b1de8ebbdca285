//! Route definitions for the LifeLink HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(request_routes())
        .merge(notification_routes())
        .merge(donor_routes())
        .merge(hospital_routes())
        .merge(donation_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Blood request submission and listing
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(handlers::request::create_request))
        .route("/requests/active", get(handlers::request::list_active))
        .route(
            "/requests/{id}/status",
            put(handlers::request::update_status),
        )
}

/// Per-user notification read-side
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/{user_id}",
            get(handlers::notification::list),
        )
        .route(
            "/notifications/{user_id}/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{user_id}/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{user_id}/{id}",
            delete(handlers::notification::delete),
        )
}

/// Donor badge endpoints
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donors/{id}/badges", get(handlers::donor::badges))
        .route(
            "/donors/{id}/badges/refresh",
            post(handlers::donor::refresh_badges),
        )
}

/// Hospital recognition and opt-in endpoints
fn hospital_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hospitals/{id}/recognition",
            get(handlers::hospital::recognition),
        )
        .route(
            "/hospitals/{id}/donors",
            get(handlers::hospital::recognized_donors),
        )
        .route("/hospitals/{id}/opt-in", get(handlers::hospital::opt_in))
}

/// Donation lifecycle endpoints
fn donation_routes() -> Router<AppState> {
    Router::new().route(
        "/donations/{id}/status",
        put(handlers::donation::update_status),
    )
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
