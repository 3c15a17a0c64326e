use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::asignatura::Asignatura;
use util::state::AppState;

/// DELETE /api/asignaturas/{id}
///
/// Remove an asignatura by its ID. The delete is unconditional: the response
/// is the same whether or not a record with that id existed.
///
/// ### Path Parameter
/// - `id` (integer): The ID of the asignatura to delete.
///
/// ### Responses
///
/// - `204 No Content` with an empty body, always, including for a missing id.
pub async fn delete_asignatura(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match Asignatura::delete_by_id(state.db(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete asignatura {id}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
