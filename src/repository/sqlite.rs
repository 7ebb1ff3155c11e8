//! SQLite-backed book repository.
//!
//! # Responsibility
//! - Provide the [`BookRepository`] CRUD surface over the `books` table.
//! - Keep SQL details inside this file.
//!
//! # Invariants
//! - Opened connections have the `books` table created.
//! - `id` is `INTEGER PRIMARY KEY AUTOINCREMENT`, so ids are unique and
//!   never reused after deletion.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, Row};
use tracing::info;

use crate::model::{Book, BookInput};

use super::errors::{RepoError, RepoResult};
use super::BookRepository;

const BOOK_SELECT_SQL: &str = "SELECT id, book_name, author_name, release_year FROM books";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_name TEXT NOT NULL,
    author_name TEXT NOT NULL,
    release_year INTEGER NOT NULL
);";

/// Book repository over a single SQLite connection.
///
/// `rusqlite::Connection` is not `Sync`, so the connection sits behind a
/// `Mutex`. Every operation acquires it for exactly one statement.
pub struct SqliteBookRepository {
    conn: Mutex<Connection>,
}

impl SqliteBookRepository {
    /// Opens a database file, creating the `books` table if needed.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "opened book database");
        Self::bootstrap(conn)
    }

    /// Opens an in-memory database. Used by tests and `init` dry runs.
    pub fn open_in_memory() -> RepoResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> RepoResult<Self> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> RepoResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl BookRepository for SqliteBookRepository {
    fn find_all(&self) -> RepoResult<Vec<Book>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }
        Ok(books)
    }

    fn insert(&self, input: &BookInput) -> RepoResult<Book> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO books (book_name, author_name, release_year) VALUES (?1, ?2, ?3);",
            params![input.book_name, input.author_name, input.release_year],
        )?;

        Ok(Book {
            id: conn.last_insert_rowid(),
            book_name: input.book_name.clone(),
            author_name: input.author_name.clone(),
            release_year: input.release_year,
        })
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Option<Book>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(parse_book_row(row)?)),
            None => Ok(None),
        }
    }

    fn replace(&self, id: i64, input: &BookInput) -> RepoResult<Option<Book>> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE books SET book_name = ?1, author_name = ?2, release_year = ?3 WHERE id = ?4;",
            params![input.book_name, input.author_name, input.release_year, id],
        )?;

        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(Book {
            id,
            book_name: input.book_name.clone(),
            author_name: input.author_name.clone(),
            release_year: input.release_year,
        }))
    }

    fn delete_by_id(&self, id: i64) -> RepoResult<bool> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM books WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        id: row.get("id")?,
        book_name: row.get("book_name")?,
        author_name: row.get("author_name")?,
        release_year: row.get("release_year")?,
    })
}
