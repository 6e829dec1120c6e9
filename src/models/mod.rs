/// Data models for posts-service
use serde::Serialize;
use sqlx::FromRow;

/// A stored post row.
///
/// `id` is assigned by PostgreSQL at insert time and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
}
