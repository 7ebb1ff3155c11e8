//! # REST API Module
//!
//! HTTP surface for book CRUD. Each route performs exactly one
//! repository operation and maps the outcome to a status and JSON body.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{HealthResponse, MessageResponse};
pub use routes::{book_routes, AppState};
pub use server::RestServer;
