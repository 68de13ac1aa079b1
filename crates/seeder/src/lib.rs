//! One-shot batch utility that fills the joke store from an external joke
//! provider.
//!
//! Jokes are fetched one at a time and written straight to the store
//! (no punchline validation). The first failed fetch stops the run; rows
//! inserted before it are kept.

pub mod error;
pub mod seed;
pub mod source;

pub use error::SeedError;
pub use seed::seed;
pub use source::{DadJokeClient, JokeSource, DEFAULT_SOURCE_URL};
