use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Represents a course subject record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asignatura {
    pub id: i64,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditos: Option<i32>,
}

impl Asignatura {
    /// Creates a new asignatura record in the database.
    ///
    /// # Arguments
    ///
    /// * `pool` - Reference to the `SqlitePool` to run the insert against.
    /// * `nombre` - The subject name (e.g., "Matemáticas").
    /// * `descripcion` - An optional description of the subject.
    /// * `creditos` - An optional credit count.
    ///
    /// # Returns
    ///
    /// Returns the newly created `Asignatura` with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a `sqlx::Error` if the insert fails.
    pub async fn create(
        pool: &SqlitePool,
        nombre: &str,
        descripcion: Option<&str>,
        creditos: Option<i32>,
    ) -> sqlx::Result<Self> {
        let record = sqlx::query_as::<_, Asignatura>(
            r#"
            INSERT INTO asignaturas (nombre, descripcion, creditos)
            VALUES (?, ?, ?)
            RETURNING id, nombre, descripcion, creditos
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(creditos)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Retrieves an asignatura by its ID.
    ///
    /// # Returns
    ///
    /// An `Option<Asignatura>` if found, or `None` if no matching record exists.
    ///
    /// # Errors
    ///
    /// Returns a `sqlx::Error` if the query fails.
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Asignatura>("SELECT * FROM asignaturas WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Retrieves all asignaturas, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a `sqlx::Error` if the query fails.
    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Asignatura>("SELECT * FROM asignaturas ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Deletes an asignatura by its ID.
    ///
    /// Succeeds whether or not a record with that id existed.
    ///
    /// # Errors
    ///
    /// Returns a `sqlx::Error` if the deletion fails.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM asignaturas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Asignatura;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_assigns_incrementing_ids() {
        let pool = setup_test_db().await;

        let first = Asignatura::create(&pool, "Matemáticas", None, None)
            .await
            .unwrap();
        let second = Asignatura::create(&pool, "Física", Some("Mecánica clásica"), Some(6))
            .await
            .unwrap();

        assert_eq!(first.nombre, "Matemáticas");
        assert!(second.id > first.id);
        assert_eq!(second.descripcion.as_deref(), Some("Mecánica clásica"));
        assert_eq!(second.creditos, Some(6));
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_missing_record() {
        let pool = setup_test_db().await;

        let found = Asignatura::get_by_id(&pool, 42).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn get_all_returns_records_in_insertion_order() {
        let pool = setup_test_db().await;

        assert!(Asignatura::get_all(&pool).await.unwrap().is_empty());

        Asignatura::create(&pool, "Historia", None, None).await.unwrap();
        Asignatura::create(&pool, "Química", None, None).await.unwrap();

        let all = Asignatura::get_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].nombre, "Historia");
        assert_eq!(all[1].nombre, "Química");
    }

    #[tokio::test]
    async fn delete_by_id_is_idempotent() {
        let pool = setup_test_db().await;

        let record = Asignatura::create(&pool, "Lengua", None, None).await.unwrap();

        Asignatura::delete_by_id(&pool, record.id).await.unwrap();
        assert!(Asignatura::get_by_id(&pool, record.id).await.unwrap().is_none());

        // Deleting again is not an error.
        Asignatura::delete_by_id(&pool, record.id).await.unwrap();
    }
}
