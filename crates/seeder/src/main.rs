//! `joke-seeder` -- populate the joke database with random jokes.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                       | Description                         |
//! |-------------------|----------|-------------------------------|-------------------------------------|
//! | `DATABASE_URL`    | no       | `sqlite://jokes.db`           | Store to write into                 |
//! | `SEED_SOURCE_URL` | no       | `https://icanhazdadjoke.com`  | Provider endpoint (`--source-url` wins) |

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joke_seeder::{DadJokeClient, DEFAULT_SOURCE_URL};

/// Populate the database with N random jokes fetched one at a time.
#[derive(Parser)]
#[command(name = "joke-seeder", about = "Populate the joke database with random jokes")]
struct Cli {
    /// Number of random jokes to retrieve.
    #[arg(default_value_t = 10)]
    number: u32,

    /// Joke provider endpoint. Must answer `GET` with `{"joke": "..."}`.
    #[arg(long)]
    source_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joke_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://jokes.db".into());
    let source_url = cli
        .source_url
        .or_else(|| std::env::var("SEED_SOURCE_URL").ok())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

    let pool = joke_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    joke_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let client = DadJokeClient::new(source_url)?;
    tracing::info!(count = cli.number, source = client.url(), "Starting seed run");

    println!("Retrieving {} jokes:", cli.number);
    println!("====================");

    let result = joke_seeder::seed(&pool, &client, cli.number, |joke| {
        println!("Joke: {}", joke.punchline.as_deref().unwrap_or_default());
    })
    .await;

    pool.close().await;
    result?;
    Ok(())
}
