//! Asignatura request models.
//!
//! Response bodies reuse `db::models::asignatura::Asignatura` directly, so
//! only the inbound payload shape lives here.

use serde::Deserialize;

/// Payload accepted by `POST /api/asignaturas`.
///
/// Any `id` sent by the client is ignored; the store assigns one on insert.
#[derive(Debug, Deserialize)]
pub struct AsignaturaRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub creditos: Option<i32>,
}
