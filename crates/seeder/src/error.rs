/// Error type for a seeding run.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The underlying HTTP request failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The joke provider answered with something other than 200 OK.
    #[error("Joke provider returned HTTP {status}")]
    Upstream { status: u16 },

    /// Writing a fetched joke to the store failed.
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}
