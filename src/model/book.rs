//! Book record shape and input validation.
//!
//! Validation semantics:
//! - All three fields are required
//! - Text fields must be strings of at most [`MAX_TEXT_LEN`] characters
//! - `release_year` must be a JSON integer (floats are rejected)
//! - No implicit coercion, no defaults, no partial acceptance
//!
//! Validation is a pure function of the input and never touches storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ValidationError;

/// Maximum length of `book_name` and `author_name`, in characters.
pub const MAX_TEXT_LEN: usize = 256;

/// A persisted book record. `id` is storage-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub book_name: String,
    pub author_name: String,
    pub release_year: i64,
}

/// The validated, mutable portion of a book record.
///
/// Produced only by [`BookInput::validate`]; holding one is proof the
/// shape constraints passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub book_name: String,
    pub author_name: String,
    pub release_year: i64,
}

impl BookInput {
    /// Validates an untyped JSON body into a `BookInput`.
    ///
    /// Every violation is accumulated into the returned
    /// [`ValidationError`] rather than failing on the first one, so a
    /// body missing two fields reports both.
    pub fn validate(value: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                errors.push(
                    "non_field_errors",
                    format!(
                        "Invalid data. Expected an object, but got {}.",
                        json_type_name(value)
                    ),
                );
                return Err(errors);
            }
        };

        let book_name = validate_text_field(obj.get("book_name"), "book_name", &mut errors);
        let author_name = validate_text_field(obj.get("author_name"), "author_name", &mut errors);
        let release_year = validate_int_field(obj.get("release_year"), "release_year", &mut errors);

        match (book_name, author_name, release_year) {
            (Some(book_name), Some(author_name), Some(release_year)) => Ok(Self {
                book_name,
                author_name,
                release_year,
            }),
            _ => Err(errors),
        }
    }
}

fn validate_text_field(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<String> {
    match value {
        None => {
            errors.push(field, "This field is required.");
            None
        }
        Some(Value::Null) => {
            errors.push(field, "This field may not be null.");
            None
        }
        Some(Value::String(text)) => {
            if text.chars().count() > MAX_TEXT_LEN {
                errors.push(
                    field,
                    format!(
                        "Ensure this field has no more than {} characters.",
                        MAX_TEXT_LEN
                    ),
                );
                return None;
            }
            Some(text.clone())
        }
        Some(_) => {
            errors.push(field, "Not a valid string.");
            None
        }
    }
}

fn validate_int_field(
    value: Option<&Value>,
    field: &str,
    errors: &mut ValidationError,
) -> Option<i64> {
    match value {
        None => {
            errors.push(field, "This field is required.");
            None
        }
        Some(Value::Null) => {
            errors.push(field, "This field may not be null.");
            None
        }
        Some(Value::Number(num)) => match num.as_i64() {
            Some(int) => Some(int),
            None => {
                // f64 or out-of-range u64
                errors.push(field, "A valid integer is required.");
                None
            }
        },
        Some(_) => {
            errors.push(field, "A valid integer is required.");
            None
        }
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
