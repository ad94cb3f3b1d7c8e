//! Blog service - validation and orchestration over the post repository.
//!
//! All validation happens here, before any store mutation, so an invalid
//! request never has partial side effects. Repository failures are wrapped
//! into [`DomainError::Storage`] with a generic per-operation message; the
//! underlying cause never leaks to the caller.

use std::sync::Arc;

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::{NewPost, PostPatch, PostRepository};

/// Stateless request orchestrator for the five post operations.
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create a post from a title and content, both required and trimmed.
    pub async fn create(&self, title: &str, content: &str) -> Result<Post, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }

        let post = self
            .posts
            .insert(NewPost {
                title: title.to_string(),
                content: content.to_string(),
            })
            .await
            .map_err(|e| storage("Failed to create blog post", e))?;

        tracing::debug!(post_id = post.id, "Created blog post");
        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.posts
            .find_all()
            .await
            .map_err(|e| storage("Failed to fetch blog posts", e))
    }

    /// Fetch a single post. The id must be positive; that is checked before
    /// any lookup is attempted.
    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation("Invalid blog post ID".to_string()));
        }

        self.posts
            .find_by_id(id)
            .await
            .map_err(|e| storage("Failed to fetch blog post", e))?
            .ok_or(DomainError::NotFound { id })
    }

    /// Update the supplied fields of an existing post.
    ///
    /// Existence is checked first, so a missing row is reported regardless of
    /// body validity. A field that is present but whitespace-only is rejected;
    /// an absent field is left unchanged. `updated_at` refreshes even when the
    /// patch carries no fields (no-op rewrites are deliberate).
    pub async fn update(&self, id: i32, patch: PostPatch) -> Result<Post, DomainError> {
        self.get(id).await?;

        let title = match patch.title {
            Some(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(DomainError::Validation("Title cannot be empty".to_string()));
                }
                Some(t.to_string())
            }
            None => None,
        };
        let content = match patch.content {
            Some(c) => {
                let c = c.trim();
                if c.is_empty() {
                    return Err(DomainError::Validation(
                        "Content cannot be empty".to_string(),
                    ));
                }
                Some(c.to_string())
            }
            None => None,
        };

        let updated = self
            .posts
            .update_by_id(id, PostPatch { title, content })
            .await
            .map_err(|e| storage("Failed to update blog post", e))?
            .ok_or(DomainError::NotFound { id })?;

        tracing::debug!(post_id = id, "Updated blog post");
        Ok(updated)
    }

    /// Hard-delete a post, checking existence first.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.get(id).await?;

        match self.posts.delete_by_id(id).await {
            Ok(()) => {
                tracing::debug!(post_id = id, "Deleted blog post");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound { id }),
            Err(e) => Err(storage("Failed to delete blog post", e)),
        }
    }
}

fn storage(message: &str, source: RepoError) -> DomainError {
    DomainError::Storage {
        message: message.to_string(),
        source,
    }
}
