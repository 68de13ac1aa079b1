//! Integration tests for the joke repository against a real SQLite database.

use joke_db::repositories::JokeRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed(pool: &SqlitePool, punchlines: &[&str]) -> Vec<i64> {
    let mut ids = Vec::new();
    for text in punchlines {
        ids.push(JokeRepo::create(pool, Some(text)).await.unwrap().id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_increasing_ids(pool: SqlitePool) {
    let first = JokeRepo::create(&pool, Some("one")).await.unwrap();
    let second = JokeRepo::create(&pool, Some("two")).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.punchline.as_deref(), Some("one"));
}

#[sqlx::test(migrations = "./migrations")]
async fn create_allows_null_punchline(pool: SqlitePool) {
    let joke = JokeRepo::create(&pool, None).await.unwrap();
    assert_eq!(joke.punchline, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_round_trips(pool: SqlitePool) {
    let created = JokeRepo::create(&pool, Some("round trip")).await.unwrap();

    let found = JokeRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_missing_returns_none(pool: SqlitePool) {
    let found = JokeRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_insertion_order(pool: SqlitePool) {
    let ids = seed(&pool, &["a", "b", "c"]).await;

    let listed: Vec<i64> = JokeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_eq!(listed, ids);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_containing_is_case_sensitive(pool: SqlitePool) {
    seed(&pool, &["food fight", "Foo Fighters", "no match", "kung foo"]).await;

    let matched: Vec<String> = JokeRepo::list_containing(&pool, "foo")
        .await
        .unwrap()
        .into_iter()
        .filter_map(|j| j.punchline)
        .collect();
    assert_eq!(matched, vec!["food fight", "kung foo"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_containing_treats_wildcards_literally(pool: SqlitePool) {
    seed(&pool, &["100% true", "100 percent", "a_b", "ab"]).await;

    let percent = JokeRepo::list_containing(&pool, "%").await.unwrap();
    assert_eq!(percent.len(), 1);

    let underscore = JokeRepo::list_containing(&pool, "_").await.unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].punchline.as_deref(), Some("a_b"));
}

#[sqlx::test(migrations = "./migrations")]
async fn list_containing_skips_null_punchlines(pool: SqlitePool) {
    JokeRepo::create(&pool, None).await.unwrap();
    seed(&pool, &["x"]).await;

    let all = JokeRepo::list_containing(&pool, "").await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_replaces_punchline_and_keeps_id(pool: SqlitePool) {
    let created = JokeRepo::create(&pool, Some("before")).await.unwrap();

    let updated = JokeRepo::update(&pool, created.id, Some("after"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.punchline.as_deref(), Some("after"));

    let reloaded = JokeRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(reloaded.punchline.as_deref(), Some("after"));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_returns_none(pool: SqlitePool) {
    let updated = JokeRepo::update(&pool, 42, Some("nobody")).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: SqlitePool) {
    let created = JokeRepo::create(&pool, Some("gone")).await.unwrap();

    assert!(JokeRepo::delete(&pool, created.id).await.unwrap());
    assert!(JokeRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!JokeRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn deleted_ids_are_not_reused(pool: SqlitePool) {
    let first = JokeRepo::create(&pool, Some("first")).await.unwrap();
    JokeRepo::delete(&pool, first.id).await.unwrap();

    let second = JokeRepo::create(&pool, Some("second")).await.unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Pool helpers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn health_check_passes(pool: SqlitePool) {
    joke_db::health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn in_memory_pool_runs_migrations() {
    let pool = joke_db::create_pool("sqlite::memory:", 1).await.unwrap();
    joke_db::run_migrations(&pool).await.unwrap();

    let joke = JokeRepo::create(&pool, Some("fresh")).await.unwrap();
    assert_eq!(JokeRepo::list(&pool).await.unwrap(), vec![joke]);
}
