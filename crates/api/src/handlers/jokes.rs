//! Handlers for the `/jokes` resource.
//!
//! Create and update bodies are read as raw bytes and decoded here, so a
//! malformed body is reported with the same validation error as a missing
//! `punchline`. Query strings and path ids are taken as `Result`s so their
//! rejections share the `{error, code}` envelope.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use joke_core::error::CoreError;
use joke_core::listing::{self, JokePage, ListQuery};
use joke_core::types::DbId;
use joke_core::validation::{punchline_required, validate_punchline};
use joke_db::models::joke::{CreateJoke, Joke, UpdateJoke};
use joke_db::repositories::JokeRepo;

use crate::error::AppResult;
use crate::query::ListJokesParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "joke", id }
}

/// GET /jokes?filter=&random=&page=&perPage=&qty=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListJokesParams>, QueryRejection>,
) -> AppResult<Json<JokePage<Joke>>> {
    let Query(params) = query?;
    let query = ListQuery::from(params);

    let jokes = match query.filter.as_deref() {
        Some(needle) => JokeRepo::list_containing(&state.pool, needle).await?,
        None => JokeRepo::list(&state.pool).await?,
    };

    let page = listing::list_page(jokes, &query, &mut rand::rng())?;
    Ok(Json(page))
}

/// POST /jokes
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Joke>)> {
    let input: CreateJoke = serde_json::from_slice(&body).map_err(|_| punchline_required())?;
    let punchline = validate_punchline(input.punchline.as_deref())?;

    let joke = JokeRepo::create(&state.pool, Some(punchline)).await?;
    tracing::info!(joke_id = joke.id, "Joke created");
    Ok((StatusCode::CREATED, Json(joke)))
}

/// GET /jokes/{id}
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Joke>> {
    let Path(id) = path?;
    let joke = JokeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(joke))
}

/// PUT /jokes/{id}
///
/// The id is checked before the body, so an unknown id is a 404 even when
/// the body is invalid.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Joke>)> {
    let Path(id) = path?;
    JokeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let input: UpdateJoke = serde_json::from_slice(&body).map_err(|_| punchline_required())?;
    let punchline = input.punchline.ok_or_else(punchline_required)?;

    let joke = JokeRepo::update(&state.pool, id, punchline.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(joke_id = id, "Joke updated");
    Ok((StatusCode::ACCEPTED, Json(joke)))
}

/// DELETE /jokes/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Path(id) = path?;
    if !JokeRepo::delete(&state.pool, id).await? {
        return Err(not_found(id).into());
    }
    tracing::info!(joke_id = id, "Joke deleted");
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new(format!("Joke at ID {id} has been deleted."))),
    ))
}
