//! Database connection management and repository implementations.

mod connections;
mod memory_repo;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use memory_repo::InMemoryPostRepository;
pub use postgres_repo::PostgresPostRepository;
