use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog post.
///
/// The `id` is assigned by the store on creation and never changes.
/// `created_at` is set exactly once; `updated_at` is refreshed on every
/// successful update, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
