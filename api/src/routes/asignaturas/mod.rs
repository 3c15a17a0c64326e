//! # Asignaturas Routes Module
//!
//! Defines and wires up routes for the `/api/asignaturas` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list all asignaturas, fetch one by id)
//! - `post.rs` — POST handler (create an asignatura)
//! - `delete.rs` — DELETE handler (remove an asignatura by id)
//! - `common.rs` — request payload types
//!
//! ## Usage
//! Call `asignatura_routes()` to get a configured `Router` for `/asignaturas`
//! to be mounted in the main app.

use axum::{
    Router,
    routing::{delete, get, post},
};
use delete::delete_asignatura;
use get::{get_asignatura, get_asignaturas};
use post::create;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

/// Builds and returns the `/asignaturas` route group.
///
/// Routes:
/// - `GET    /asignaturas`        → list all asignaturas
/// - `POST   /asignaturas`        → create a new asignatura
/// - `GET    /asignaturas/{id}`   → get a single asignatura by ID
/// - `DELETE /asignaturas/{id}`   → delete an asignatura by ID
pub fn asignatura_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_asignaturas))
        .route("/", post(create))
        .route("/{id}", get(get_asignatura))
        .route("/{id}", delete(delete_asignatura))
}
