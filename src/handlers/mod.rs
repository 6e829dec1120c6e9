/// HTTP handlers for posts-service
///
/// - Posts: create, read, update, delete over `/posts`
/// - Health: store reachability probe
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use health::health_check;
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
