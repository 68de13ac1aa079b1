//! Where seeded jokes come from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::SeedError;

/// Public dad-joke endpoint used when no other source is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://icanhazdadjoke.com";

/// HTTP request timeout for a single fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("joke-seeder/", env!("CARGO_PKG_VERSION"));

/// A provider that yields one joke per call.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch(&self) -> Result<String, SeedError>;
}

/// Body returned by the provider: `{"joke": "..."}` (other fields ignored).
#[derive(Debug, Deserialize)]
struct JokeBody {
    joke: String,
}

/// Fetches jokes over HTTP with a plain `GET` and `Accept: application/json`.
pub struct DadJokeClient {
    client: reqwest::Client,
    url: String,
}

impl DadJokeClient {
    /// Create a client for `url` with a fixed request timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, SeedError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JokeSource for DadJokeClient {
    async fn fetch(&self) -> Result<String, SeedError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SeedError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let body: JokeBody = response.json().await?;
        Ok(body.joke)
    }
}
