//! The seeding loop.

use joke_db::models::joke::Joke;
use joke_db::repositories::JokeRepo;
use joke_db::DbPool;

use crate::error::SeedError;
use crate::source::JokeSource;

/// Fetch `count` jokes from `source`, one request at a time, inserting each
/// into the store as soon as it arrives and passing it to `on_insert`.
///
/// Returns the number of jokes inserted. Stops at the first error without
/// issuing further requests; earlier inserts are not rolled back.
pub async fn seed<S, F>(
    pool: &DbPool,
    source: &S,
    count: u32,
    mut on_insert: F,
) -> Result<u32, SeedError>
where
    S: JokeSource + ?Sized,
    F: FnMut(&Joke),
{
    for inserted in 0..count {
        match fetch_and_store(pool, source).await {
            Ok(joke) => {
                tracing::debug!(joke_id = joke.id, "Seeded joke");
                on_insert(&joke);
            }
            Err(e) => {
                tracing::error!(inserted, error = %e, "Stopping seed run");
                return Err(e);
            }
        }
    }

    tracing::info!(count, "Seed run complete");
    Ok(count)
}

async fn fetch_and_store<S>(pool: &DbPool, source: &S) -> Result<Joke, SeedError>
where
    S: JokeSource + ?Sized,
{
    let punchline = source.fetch().await?;
    Ok(JokeRepo::create(pool, Some(&punchline)).await?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
