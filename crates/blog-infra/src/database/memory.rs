//! In-memory post repository - used as fallback when no database is
//! configured, and as a test double for the service layer.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{NewPost, PostPatch, PostRepository};

/// Keeps posts in a `Vec` behind an async RwLock. Ids come from a monotonic
/// counter and are never reused, even after deletes.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new.title,
            content: new.content,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.posts.read().await.clone();
        // newest first; id breaks ties between same-instant creations
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        post.updated_at = Utc::now();

        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
