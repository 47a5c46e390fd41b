//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the PostgreSQL post repository (SeaORM) and an in-memory fallback
//! used when no database is configured.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository};
