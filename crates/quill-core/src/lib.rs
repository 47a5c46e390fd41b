//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` entity, field validation, the post service, and the repository port
//! that infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::DomainError;
pub use service::PostService;
