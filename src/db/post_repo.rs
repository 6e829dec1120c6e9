/// Posts repository - one parameterized SQL statement per operation
///
/// All user-supplied values are passed as bound parameters, never
/// concatenated into SQL text.
use crate::models::Post;
use sqlx::PgPool;

/// Insert a new post and return the stored row, including the generated id.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    description: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, description)
        VALUES ($1, $2)
        RETURNING id, title, description
        "#,
    )
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Fetch every post in insertion (id) order.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, description
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by ID.
pub async fn find_post_by_id(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, description
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Update a post's title and description.
///
/// Returns the number of rows touched (0 when the id does not exist).
pub async fn update_post(
    pool: &PgPool,
    post_id: i64,
    title: &str,
    description: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = $1, description = $2
        WHERE id = $3
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a post by ID.
///
/// Returns the number of rows removed (0 when the id does not exist).
pub async fn delete_post(pool: &PgPool, post_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
