//! API Contract Tests
//!
//! Drives the route handlers directly over a real SQLite repository and
//! asserts the documented status-code policy:
//! - GET /api/books: 200 with array, or 404 when empty
//! - POST /api/books: 201 with assigned id, or 400 with field errors
//! - GET/PUT/DELETE /api/books/{id}: 404 with "Book not found" on miss
//! - DELETE success: 200 with "Book deleted"

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bookshelf::repository::SqliteBookRepository;
use bookshelf::rest_api::routes::{
    create_book, delete_book, get_book, list_books, update_book,
};
use bookshelf::rest_api::{ApiError, AppState, MessageResponse};

fn sqlite_state() -> Arc<AppState> {
    let repo = Arc::new(SqliteBookRepository::open_in_memory().unwrap());
    Arc::new(AppState::new(repo))
}

#[tokio::test]
async fn test_post_dune_scenario() {
    let state = sqlite_state();

    let (status, Json(book)) = create_book(
        State(state),
        Json(json!({
            "book_name": "Dune",
            "author_name": "Herbert",
            "release_year": 1965
        })),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert!(book.id > 0);
    assert_eq!(book.book_name, "Dune");
    assert_eq!(book.author_name, "Herbert");
    assert_eq!(book.release_year, 1965);
}

#[tokio::test]
async fn test_post_missing_fields_scenario() {
    let state = sqlite_state();

    let err = create_book(State(state), Json(json!({"book_name": "Dune"})))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    match err {
        ApiError::Validation(errors) => {
            assert_eq!(
                errors.field("author_name").unwrap(),
                ["This field is required."]
            );
            assert_eq!(
                errors.field("release_year").unwrap(),
                ["This field is required."]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_empty_returns_404_with_message() {
    let state = sqlite_state();

    let err = list_books(State(state)).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "No books found");
}

#[tokio::test]
async fn test_list_length_tracks_store() {
    let state = sqlite_state();

    for i in 0..3 {
        create_book(
            State(state.clone()),
            Json(json!({
                "book_name": format!("Book {i}"),
                "author_name": "Author",
                "release_year": 2000 + i
            })),
        )
        .await
        .unwrap();
    }

    let Json(books) = list_books(State(state)).await.unwrap();
    assert_eq!(books.len(), 3);
}

#[tokio::test]
async fn test_missing_id_policy_is_uniform() {
    let state = sqlite_state();
    let body = json!({
        "book_name": "Dune",
        "author_name": "Herbert",
        "release_year": 1965
    });

    let get_err = get_book(State(state.clone()), Path(77)).await.unwrap_err();
    let update_err = update_book(State(state.clone()), Path(77), Json(body))
        .await
        .unwrap_err();
    let delete_err = delete_book(State(state), Path(77)).await.unwrap_err();

    for err in [get_err, update_err, delete_err] {
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Book not found");
    }
}

#[tokio::test]
async fn test_full_lifecycle() {
    let state = sqlite_state();

    // create
    let (_, Json(created)) = create_book(
        State(state.clone()),
        Json(json!({
            "book_name": "A",
            "author_name": "B",
            "release_year": 2000
        })),
    )
    .await
    .unwrap();

    // read back byte-identical field values
    let Json(fetched) = get_book(State(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // full replacement update
    let Json(updated) = update_book(
        State(state.clone()),
        Path(created.id),
        Json(json!({
            "book_name": "C",
            "author_name": "B",
            "release_year": 2000
        })),
    )
    .await
    .unwrap();
    assert_eq!(updated.book_name, "C");
    assert_eq!(updated.author_name, "B");
    assert_eq!(updated.release_year, 2000);
    assert_eq!(updated.id, created.id);

    // delete confirms, then the id is gone
    let Json(msg) = delete_book(State(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert_eq!(msg, MessageResponse::new("Book deleted"));

    let err = get_book(State(state), Path(created.id)).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_partial_body() {
    let state = sqlite_state();

    let (_, Json(created)) = create_book(
        State(state.clone()),
        Json(json!({
            "book_name": "Dune",
            "author_name": "Herbert",
            "release_year": 1965
        })),
    )
    .await
    .unwrap();

    // No merge semantics: omitting fields is a validation failure.
    let err = update_book(
        State(state.clone()),
        Path(created.id),
        Json(json!({"release_year": 1966})),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    // And the stored record is untouched.
    let Json(stored) = get_book(State(state), Path(created.id)).await.unwrap();
    assert_eq!(stored, created);
}
