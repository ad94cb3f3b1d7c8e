//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the PostgreSQL repository, the database connection
//! management, and the in-memory fallback repository.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository, connect};
