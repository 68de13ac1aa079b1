//! Route definitions for the `/jokes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::jokes;
use crate::state::AppState;

/// ```text
/// GET    /jokes        -> list
/// POST   /jokes        -> create
/// GET    /jokes/{id}   -> show
/// PUT    /jokes/{id}   -> update
/// DELETE /jokes/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jokes", get(jokes::list).post(jokes::create))
        .route(
            "/jokes/{id}",
            get(jokes::show).put(jokes::update).delete(jokes::delete),
        )
}
