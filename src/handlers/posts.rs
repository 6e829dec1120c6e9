/// Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub description: String,
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = post_repo::create_post(pool.get_ref(), &req.title, &req.description).await?;

    Ok(HttpResponse::Created().json(post))
}

/// List all posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    match post_repo::find_post_by_id(pool.get_ref(), *post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {}", *post_id))),
    }
}

/// Update a post's title and description
///
/// Updating an id that does not exist is a no-op and still reports success.
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let rows = post_repo::update_post(pool.get_ref(), *post_id, &req.title, &req.description).await?;
    tracing::debug!(post_id = *post_id, rows_affected = rows, "update applied");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "post updated",
    })))
}

/// Delete a post
///
/// Deleting an id that does not exist is a no-op and still reports success.
pub async fn delete_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let rows = post_repo::delete_post(pool.get_ref(), *post_id).await?;
    tracing::debug!(post_id = *post_id, rows_affected = rows, "delete applied");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "post deleted",
    })))
}
