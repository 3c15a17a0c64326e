use api::routes::routes;
use axum::Router;
use db::test_utils::setup_test_db;
use util::state::AppState;

/// Builds an application router over a fresh in-memory database.
///
/// Each call yields an isolated store, so tests never observe each
/// other's records. The `AppState` is returned alongside the router for
/// tests that seed or inspect the database directly.
pub async fn make_test_app() -> (Router, AppState) {
    let app_state = AppState::new(setup_test_db().await);

    let router = Router::new().nest("/api", routes(app_state.clone()));

    (router, app_state)
}
