//! # Book Repository
//!
//! Explicit storage interface for book records. Handlers depend only on
//! the [`BookRepository`] trait, so the SQLite implementation can be
//! swapped for the in-memory one in tests.

pub mod errors;
pub mod memory;
pub mod sqlite;

pub use errors::{RepoError, RepoResult};
pub use memory::InMemoryBookRepository;
pub use sqlite::SqliteBookRepository;

use crate::model::{Book, BookInput};

/// Repository interface for book CRUD operations.
///
/// Each method is a single storage operation; there are no
/// multi-statement transactions. Atomicity of single-row operations is
/// delegated to the storage engine.
pub trait BookRepository: Send + Sync {
    /// Fetch every record, in insertion order.
    fn find_all(&self) -> RepoResult<Vec<Book>>;

    /// Insert a new record. Storage assigns the id; ids are never
    /// reused, even after deletion.
    fn insert(&self, input: &BookInput) -> RepoResult<Book>;

    /// Point lookup by id.
    fn find_by_id(&self, id: i64) -> RepoResult<Option<Book>>;

    /// Overwrite every mutable field of the record with the given id.
    /// Returns `None` if no such record exists. The id never changes.
    fn replace(&self, id: i64, input: &BookInput) -> RepoResult<Option<Book>>;

    /// Remove the record with the given id. Returns whether a row was
    /// actually deleted.
    fn delete_by_id(&self, id: i64) -> RepoResult<bool>;
}
