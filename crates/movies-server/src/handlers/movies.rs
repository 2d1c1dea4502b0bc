//! Movie collection handlers (list, get, create, update, remove).

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use movies_core::{FieldError, Movie, MovieDraft, MoviePatch};

use crate::error::ApiError;
use crate::schema::movies::{ListMoviesQuery, MessageResponse};
use crate::state::AppState;

/// Lists the collection, optionally filtered by genre (case-insensitive).
/// No match yields an empty array, still 200.
///
/// `GET /movies`
pub async fn list_movies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<Movie>> {
    if let Some(origin) = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok()) {
        tracing::debug!(%origin, "list request origin");
    }

    let catalog = state.catalog.lock().await;
    let movies = match query.genre.as_deref() {
        Some(genre) => catalog.with_genre(genre),
        None => catalog.movies().to_vec(),
    };
    Json(movies)
}

/// `GET /movies/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let catalog = state.catalog.lock().await;
    match catalog.get(&id) {
        Some(movie) => Ok(Json(movie.clone())),
        None => Err(ApiError::NotFound("Movie not found".to_string())),
    }
}

/// Creates a movie from a validated draft. A validation failure reports
/// every failing field joined into one message string.
///
/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    Json(draft): Json<MovieDraft>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let fields = draft
        .validate()
        .map_err(|errors| ApiError::BadRequest(join_field_errors(&errors)))?;

    let mut catalog = state.catalog.lock().await;
    let movie = catalog.create(fields);
    tracing::info!(id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Merges a partial body over an existing record. An unknown id is 404
/// before the body is validated; a validation failure carries the
/// structured field-error list.
///
/// `PATCH /movies/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<MoviePatch>,
) -> Result<Json<Movie>, ApiError> {
    let mut catalog = state.catalog.lock().await;
    let movie = catalog.update(&id, patch)?;
    Ok(Json(movie))
}

/// `DELETE /movies/{id}`
pub async fn remove_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut catalog = state.catalog.lock().await;
    catalog.remove(&id)?;
    Ok(Json(MessageResponse {
        message: "Movie deleted",
    }))
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
