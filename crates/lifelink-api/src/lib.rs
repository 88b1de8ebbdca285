//! # lifelink-api
//!
//! HTTP API layer for LifeLink built on Axum: REST endpoints for blood
//! requests, notifications, badges, recognition, and the opt-in flow,
//! plus DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
