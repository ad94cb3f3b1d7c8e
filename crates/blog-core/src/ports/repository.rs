use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Input for creating a post. Values are validated and trimmed by the service
/// before they reach the repository.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Partial update of a post. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Post repository - primitive access to the persisted post collection.
///
/// Every operation is a single statement against the backing store; there is
/// no application-level locking or retry on top of it.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. The store assigns a fresh id and sets both
    /// timestamps to the current time.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts, ordered by creation time descending (newest first).
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Overwrite the supplied fields of an existing post. Returns `None` when
    /// no row has that id. Always refreshes `updated_at`, even when the patch
    /// is empty.
    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Hard-delete a post. Fails with [`RepoError::NotFound`] when no row was
    /// affected.
    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError>;
}
