//! In-memory book repository for testing.
//!
//! Mirrors the SQLite implementation's semantics: insertion-ordered
//! listing, monotonically increasing ids that are never reused.

use std::sync::RwLock;

use crate::model::{Book, BookInput};

use super::errors::{RepoError, RepoResult};
use super::BookRepository;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    rows: Vec<Book>,
}

/// In-memory repository backed by a `Vec` under an `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_all(&self) -> RepoResult<Vec<Book>> {
        let state = self.state.read().map_err(|_| RepoError::LockPoisoned)?;
        Ok(state.rows.clone())
    }

    fn insert(&self, input: &BookInput) -> RepoResult<Book> {
        let mut state = self.state.write().map_err(|_| RepoError::LockPoisoned)?;
        state.next_id += 1;

        let book = Book {
            id: state.next_id,
            book_name: input.book_name.clone(),
            author_name: input.author_name.clone(),
            release_year: input.release_year,
        };
        state.rows.push(book.clone());
        Ok(book)
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<Book>> {
        let state = self.state.read().map_err(|_| RepoError::LockPoisoned)?;
        Ok(state.rows.iter().find(|b| b.id == id).cloned())
    }

    fn replace(&self, id: i64, input: &BookInput) -> RepoResult<Option<Book>> {
        let mut state = self.state.write().map_err(|_| RepoError::LockPoisoned)?;

        match state.rows.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.book_name = input.book_name.clone();
                book.author_name = input.author_name.clone();
                book.release_year = input.release_year;
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_by_id(&self, id: i64) -> RepoResult<bool> {
        let mut state = self.state.write().map_err(|_| RepoError::LockPoisoned)?;

        match state.rows.iter().position(|b| b.id == id) {
            Some(idx) => {
                state.rows.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
