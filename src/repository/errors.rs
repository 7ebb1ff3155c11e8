//! Repository error types.

use thiserror::Error;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors surfaced by a book repository.
///
/// These are storage-layer failures only. "Row not found" is not an
/// error here: lookups return `Option` and deletes return a flag, and
/// the API layer decides what a miss means.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Underlying SQLite failure (connection, statement, row decode).
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A lock guarding the connection or the in-memory table was
    /// poisoned by a panicking holder.
    #[error("storage lock poisoned")]
    LockPoisoned,
}
