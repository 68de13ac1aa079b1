pub mod health;
pub mod jokes;
pub mod welcome;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /                 welcome
/// GET    /health           health check
/// GET    /jokes            list (filter, random, page, perPage, qty)
/// POST   /jokes            create
/// GET    /jokes/{id}       show
/// PUT    /jokes/{id}       update
/// DELETE /jokes/{id}       delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(welcome::router())
        .merge(health::router())
        .merge(jokes::router())
}
