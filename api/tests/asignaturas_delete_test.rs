mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::asignatura::Asignatura;
    use tower::ServiceExt;

    fn delete_request(id: i64) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/asignaturas/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    /// Test Case: Deleting an existing record returns 204 and removes it
    #[tokio::test]
    async fn test_delete_asignatura_success() {
        let (app, app_state) = make_test_app().await;

        let created = Asignatura::create(app_state.db(), "Matemáticas", None, None)
            .await
            .expect("Failed to create test asignatura");

        let response = app.clone().oneshot(delete_request(created.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty(), "204 body should be empty");

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/asignaturas/{}", created.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Deleting a non-existent id still returns 204
    #[tokio::test]
    async fn test_delete_missing_asignatura_returns_no_content() {
        let (app, _app_state) = make_test_app().await;

        let response = app.oneshot(delete_request(99999)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    /// Test Case: Delete is idempotent under repetition
    #[tokio::test]
    async fn test_delete_twice_returns_no_content_both_times() {
        let (app, app_state) = make_test_app().await;

        let created = Asignatura::create(app_state.db(), "Química", None, None)
            .await
            .expect("Failed to create test asignatura");

        for _ in 0..2 {
            let response = app.clone().oneshot(delete_request(created.id)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
    }
}
