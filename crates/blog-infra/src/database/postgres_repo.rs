//! PostgreSQL post repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, QueryOrder, Set};

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{NewPost, PostPatch, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository. Every operation is a single statement under
/// the backend's default auto-commit behavior.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            title: Set(new.title),
            content: Set(new.content),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(classify)?;
        Ok(saved.into())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding blog post by id");

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(classify)?;

        Ok(row.map(Into::into))
    }

    async fn update_by_id(&self, id: i32, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(found) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(classify)?
        else {
            return Ok(None);
        };

        let mut model = found.into_active_model();
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(content) = patch.content {
            model.content = Set(content);
        }
        // updated_at refreshes even when the patch carries no fields
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(&self.db).await.map_err(classify)?;
        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

fn classify(err: sea_orm::DbErr) -> RepoError {
    match err {
        sea_orm::DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}
