//! Database connection management and repository implementations.

mod connection;
pub mod entity;
mod memory;
mod postgres_repo;

pub use connection::{DatabaseConfig, connect};
pub use memory::InMemoryPostRepository;
pub use postgres_repo::PostgresPostRepository;
