//! Application state - wires the repository into the post service.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;
use quill_infra::database::DatabaseConfig;
use quill_infra::{InMemoryPostRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
}

impl AppState {
    /// Build the application state with the appropriate repository
    /// implementation.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo: Arc<dyn PostRepository> = match db_config {
            Some(config) => match quill_infra::database::connect(config).await {
                Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
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
            post_service: Arc::new(PostService::new(repo)),
        }
    }
}
