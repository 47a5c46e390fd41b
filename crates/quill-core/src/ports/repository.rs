use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository port. The record store exclusively owns persisted rows;
/// implementations assign `id` and `time_created` on insert and never change
/// either afterwards.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new row. Input is assumed validated and trimmed.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Single-row lookup by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Every row, with no ordering contract.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// One page of rows ordered by `id` descending (newest first).
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Count of all rows.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Persist new text-field values for an existing row, identified by
    /// `post.id`. `time_created` is left untouched.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Hard delete. Returns [`RepoError::NotFound`] when no row matched.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
