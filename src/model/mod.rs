//! # Resource Model
//!
//! The canonical shape of a book record and the validation rules
//! applied to every write operation.

pub mod book;
pub mod errors;

pub use book::{Book, BookInput, MAX_TEXT_LEN};
pub use errors::ValidationError;
