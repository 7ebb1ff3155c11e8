//! # Book Routes
//!
//! One handler per operation. Control flow per request: parse method
//! and path, validate the body for writes, issue one repository call,
//! map the outcome to a status and body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::debug;

use crate::model::{Book, BookInput};
use crate::repository::BookRepository;

use super::errors::ApiError;
use super::response::{HealthResponse, MessageResponse};

/// State shared across handlers.
pub struct AppState {
    pub repo: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }
}

/// Build the book API router.
///
/// GET and POST share `/api/books`, disambiguated by method; the
/// id-scoped routes carry GET, PUT and DELETE.
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// List every book. Empty table is reported as 404, matching the
/// original API contract (the "no data is an error" policy is
/// deliberate, not a bug).
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.repo.find_all()?;
    if books.is_empty() {
        return Err(ApiError::NoBooksFound);
    }

    debug!(count = books.len(), "listed books");
    Ok(Json(books))
}

/// Create a book. Storage assigns the id; the response echoes the
/// submitted fields plus that id.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let input = BookInput::validate(&body).map_err(ApiError::Validation)?;
    let book = state.repo.insert(&input)?;

    debug!(id = book.id, "created book");
    Ok((StatusCode::CREATED, Json(book)))
}

/// Fetch a single book by id.
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, ApiError> {
    let book = state.repo.find_by_id(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(book))
}

/// Replace every mutable field of a book. Full replacement semantics:
/// the body must carry all required fields, nothing is merged from the
/// stored record.
///
/// Existence is checked before validation, so an unknown id yields 404
/// even when the body is also invalid.
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Book>, ApiError> {
    if state.repo.find_by_id(id)?.is_none() {
        return Err(ApiError::NotFound);
    }

    let input = BookInput::validate(&body).map_err(ApiError::Validation)?;

    // The row can vanish between the lookup and the write; treat that
    // as the same 404.
    let book = state.repo.replace(id, &input)?.ok_or(ApiError::NotFound)?;

    debug!(id = book.id, "updated book");
    Ok(Json(book))
}

/// Delete a book by id. Returns 200 with a confirmation message; the
/// original paired 204 with a JSON body, which HTTP forbids.
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.repo.delete_by_id(id)? {
        return Err(ApiError::NotFound);
    }

    debug!(id, "deleted book");
    Ok(Json(MessageResponse::new("Book deleted")))
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryBookRepository;
    use serde_json::json;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(InMemoryBookRepository::new())))
    }

    fn dune() -> Value {
        json!({
            "book_name": "Dune",
            "author_name": "Herbert",
            "release_year": 1965
        })
    }

    #[tokio::test]
    async fn test_list_empty_is_no_books_found() {
        let state = test_state();

        let err = list_books(State(state)).await.unwrap_err();
        assert!(matches!(err, ApiError::NoBooksFound));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = test_state();

        let (status, Json(book)) = create_book(State(state.clone()), Json(dune()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(book.book_name, "Dune");
        assert_eq!(book.author_name, "Herbert");
        assert_eq!(book.release_year, 1965);

        let Json(books) = list_books(State(state)).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0], book);
    }

    #[tokio::test]
    async fn test_create_invalid_reports_field_errors() {
        let state = test_state();

        let err = create_book(State(state), Json(json!({"book_name": "Dune"})))
            .await
            .unwrap_err();

        match err {
            ApiError::Validation(errors) => {
                assert!(errors.field("author_name").is_some());
                assert!(errors.field("release_year").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_round_trips_created_record() {
        let state = test_state();

        let (_, Json(created)) = create_book(State(state.clone()), Json(dune()))
            .await
            .unwrap();
        let Json(fetched) = get_book(State(state), Path(created.id)).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let state = test_state();

        let err = get_book(State(state), Path(999)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let state = test_state();

        let (_, Json(created)) = create_book(
            State(state.clone()),
            Json(json!({"book_name": "A", "author_name": "B", "release_year": 2000})),
        )
        .await
        .unwrap();

        let Json(updated) = update_book(
            State(state.clone()),
            Path(created.id),
            Json(json!({"book_name": "C", "author_name": "B", "release_year": 2000})),
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.book_name, "C");
        assert_eq!(updated.author_name, "B");
        assert_eq!(updated.release_year, 2000);

        let Json(stored) = get_book(State(state), Path(created.id)).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found_even_with_bad_body() {
        let state = test_state();

        // 404 takes precedence over validation.
        let err = update_book(State(state), Path(999), Json(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_invalid_body_is_validation_error() {
        let state = test_state();

        let (_, Json(created)) = create_book(State(state.clone()), Json(dune()))
            .await
            .unwrap();

        // Partial bodies are rejected: full replacement requires every field.
        let err = update_book(
            State(state),
            Path(created.id),
            Json(json!({"book_name": "Dune Messiah"})),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_then_all_lookups_miss() {
        let state = test_state();

        let (_, Json(created)) = create_book(State(state.clone()), Json(dune()))
            .await
            .unwrap();

        let Json(msg) = delete_book(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(msg, MessageResponse::new("Book deleted"));

        let get_err = get_book(State(state.clone()), Path(created.id))
            .await
            .unwrap_err();
        assert!(matches!(get_err, ApiError::NotFound));

        let update_err = update_book(State(state.clone()), Path(created.id), Json(dune()))
            .await
            .unwrap_err();
        assert!(matches!(update_err, ApiError::NotFound));

        let delete_err = delete_book(State(state), Path(created.id))
            .await
            .unwrap_err();
        assert!(matches!(delete_err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let state = test_state();

        let err = delete_book(State(state), Path(1)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_router_builds() {
        let _router = book_routes(test_state());
    }
}
