use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every joke handler. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Pool over the SQLite joke store.
    pub pool: joke_db::DbPool,
    pub config: Arc<ServerConfig>,
}
