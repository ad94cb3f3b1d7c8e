//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blog_core::domain::Post;

/// Request to create a blog post. Both fields are required, but a missing
/// key deserializes to `None` so the service can report it with the same
/// message as an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request to update a blog post. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A blog post as it appears on the wire: camelCase keys, ISO-8601 timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Envelope returned by create and update: a human-readable message plus the
/// post as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageResponse {
    pub message: String,
    pub post: PostResponse,
}
