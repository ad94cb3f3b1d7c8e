//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository};
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let posts: Arc<dyn PostRepository> = match db_config {
            Some(config) => match blog_infra::connect(config).await {
                Ok(conn) => {
                    if config.auto_migrate {
                        match Migrator::up(&conn, None).await {
                            Ok(()) => tracing::info!("Schema migrations applied"),
                            Err(e) => tracing::error!("Failed to run migrations: {}", e),
                        }
                    }
                    Arc::new(PostgresPostRepository::new(conn))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Self {
            blog: Arc::new(BlogService::new(posts)),
        }
    }
}
