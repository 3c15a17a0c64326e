//! Asignatura creation route.
//!
//! Provides the `POST /api/asignaturas` endpoint for registering new subjects.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::asignatura::Asignatura;
use util::state::AppState;

use crate::routes::asignaturas::common::AsignaturaRequest;

/// POST /api/asignaturas
///
/// Create a new asignatura. The store assigns the id.
///
/// ### Request Body
/// ```json
/// { "nombre": "Matemáticas", "descripcion": "Álgebra y cálculo", "creditos": 6 }
/// ```
///
/// `descripcion` and `creditos` are optional; no further validation is applied.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "id": 1, "nombre": "Matemáticas", "descripcion": "Álgebra y cálculo", "creditos": 6 }
/// ```
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<AsignaturaRequest>,
) -> Response {
    match Asignatura::create(
        state.db(),
        &req.nombre,
        req.descripcion.as_deref(),
        req.creditos,
    )
    .await
    {
        Ok(asignatura) => (StatusCode::OK, Json(asignatura)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create asignatura: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
