//! Schema migrations for the Blogspace database.

pub use sea_orm_migration::prelude::*;

mod m20260824_000001_create_blog_posts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20260824_000001_create_blog_posts_table::Migration,
        )]
    }
}
