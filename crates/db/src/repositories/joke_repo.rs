//! Repository for the `joke` table.

use joke_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::joke::Joke;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, punchline";

/// Provides CRUD operations for jokes.
pub struct JokeRepo;

impl JokeRepo {
    /// Insert a new joke, returning the created row with its assigned id.
    pub async fn create(pool: &SqlitePool, punchline: Option<&str>) -> Result<Joke, sqlx::Error> {
        let query = format!("INSERT INTO joke (punchline) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Joke>(&query)
            .bind(punchline)
            .fetch_one(pool)
            .await
    }

    /// Find a joke by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Joke>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM joke WHERE id = ?1");
        sqlx::query_as::<_, Joke>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jokes in primary-key order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Joke>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM joke ORDER BY id ASC");
        sqlx::query_as::<_, Joke>(&query).fetch_all(pool).await
    }

    /// List jokes whose punchline contains `needle`, in primary-key order.
    ///
    /// The match is a case-sensitive literal substring test (`instr`), so
    /// `%` and `_` in `needle` have no special meaning. Rows with a NULL
    /// punchline never match.
    pub async fn list_containing(
        pool: &SqlitePool,
        needle: &str,
    ) -> Result<Vec<Joke>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM joke
             WHERE instr(punchline, ?1) > 0
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Joke>(&query)
            .bind(needle)
            .fetch_all(pool)
            .await
    }

    /// Replace a joke's punchline.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        punchline: Option<&str>,
    ) -> Result<Option<Joke>, sqlx::Error> {
        let query = format!("UPDATE joke SET punchline = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Joke>(&query)
            .bind(id)
            .bind(punchline)
            .fetch_optional(pool)
            .await
    }

    /// Delete a joke by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM joke WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
