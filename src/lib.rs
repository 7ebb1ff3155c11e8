//! bookshelf - a small self-hostable CRUD service for a book catalog
//!
//! HTTP in, SQLite out: each request maps to exactly one storage
//! operation on the `books` table.

pub mod cli;
pub mod config;
pub mod model;
pub mod repository;
pub mod rest_api;
