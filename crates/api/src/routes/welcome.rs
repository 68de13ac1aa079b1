use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Static service banner.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// GET / -- service name and version.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        name: "Joke API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
