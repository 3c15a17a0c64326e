//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by domain:
//! - `/health` → Health check endpoint
//! - `/asignaturas` → Asignatura CRUD endpoints

use crate::routes::{asignaturas::asignatura_routes, health::health_routes};
use axum::Router;
use util::state::AppState;

pub mod asignaturas;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The router is constructed with `AppState` and mounts all route groups
/// under their respective base paths:
/// - `/health` → Health check endpoint.
/// - `/asignaturas` → Asignatura listing, lookup, creation and deletion.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/asignaturas", asignatura_routes())
        .with_state(app_state)
}
