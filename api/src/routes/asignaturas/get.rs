use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::asignatura::Asignatura;
use util::state::AppState;

/// GET /api/asignaturas
///
/// Retrieve the list of all asignaturas currently held by the store.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   { "id": 1, "nombre": "Matemáticas" },
///   { "id": 2, "nombre": "Física", "descripcion": "Mecánica clásica", "creditos": 6 }
/// ]
/// ```
///
/// An empty store yields `200 OK` with `[]`, never an error.
pub async fn get_asignaturas(State(state): State<AppState>) -> Response {
    match Asignatura::get_all(state.db()).await {
        Ok(asignaturas) => (StatusCode::OK, Json(asignaturas)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list asignaturas: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /api/asignaturas/{id}
///
/// Retrieve a single asignatura by its ID.
///
/// ### Path Parameter
/// - `id` (integer): The ID of the asignatura to retrieve.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "id": 1, "nombre": "Matemáticas" }
/// ```
///
/// - `404 Not Found` with an empty body, when no record with that id exists.
pub async fn get_asignatura(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match Asignatura::get_by_id(state.db(), id).await {
        Ok(Some(asignatura)) => (StatusCode::OK, Json(asignatura)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch asignatura {id}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
