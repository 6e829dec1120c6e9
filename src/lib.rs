/// Posts Service Library
///
/// A small CRUD backend exposing the `posts` table over HTTP.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the posts resource
/// - `models`: Row types returned to clients
/// - `db`: Connection pool construction and the posts repository
/// - `error`: Error types and their HTTP mapping
/// - `config`: Environment-driven configuration
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
