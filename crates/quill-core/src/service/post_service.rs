use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation;

/// Upper bound on the page size accepted by [`PostService::paginate`].
pub const MAX_PAGE_LIMIT: i64 = 100;

/// One page of posts plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    /// Rows on this page, ordered by `id` descending.
    pub items: Vec<Post>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Post service - the single place that talks to the record store. All
/// API-layer mutations route through here, so validation cannot be bypassed.
///
/// The repository is injected at construction; concurrent requests each hold
/// their own `Arc` to it and isolation between writers is delegated to the
/// store's transactions.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post from validated, trimmed input. Nothing is written when
    /// validation fails.
    pub async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let post = validation::validate_new(post)?;
        tracing::debug!(title = %post.title, author = %post.author, "creating post");
        self.repo.insert(post).await.map_err(store_failure)
    }

    /// Single lookup by id. A nonexistent id is `Ok(None)`, never an error.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, DomainError> {
        self.repo.find_by_id(id).await.map_err(store_failure)
    }

    /// Every post, unordered by contract. Kept distinct from [`Self::paginate`]
    /// so callers that do not need ordering do not pay for a sort.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(store_failure)
    }

    /// One page of posts, newest first.
    ///
    /// `page` counts from 1 and `limit` must be in `1..=100`. A page past the
    /// end returns an empty item list with still-correct metadata rather than
    /// an error.
    pub async fn paginate(&self, page: i64, limit: i64) -> Result<PostPage, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidArgument("page must be >= 1".into()));
        }
        if limit < 1 {
            return Err(DomainError::InvalidArgument("limit must be >= 1".into()));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(DomainError::InvalidArgument(
                "limit cannot exceed 100".into(),
            ));
        }

        let page = page as u64;
        let limit = limit as u64;

        let total_count = self.repo.count().await.map_err(store_failure)?;
        // An empty store still has one (empty) page.
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(limit)
        };

        let offset = (page - 1) * limit;
        let items = self
            .repo
            .find_page(offset, limit)
            .await
            .map_err(store_failure)?;

        Ok(PostPage {
            items,
            total_count,
            total_pages,
            current_page: page,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        })
    }

    /// Partial update: only fields supplied in `patch` change; omitted fields
    /// keep their stored values. Atomic - if any supplied field fails
    /// validation, no field is written.
    pub async fn update(&self, id: i32, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self
            .repo
            .find_by_id(id)
            .await
            .map_err(store_failure)?
            .ok_or(DomainError::NotFound { id })?;

        let patch = validation::validate_patch(patch)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }

        tracing::debug!(post_id = id, "updating post");
        self.repo.update(post).await.map_err(store_failure)
    }

    /// Hard delete. Fails with [`DomainError::NotFound`] for a nonexistent id.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        tracing::debug!(post_id = id, "deleting post");
        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => Err(DomainError::NotFound { id }),
            Err(err) => Err(store_failure(err)),
        }
    }
}

/// Store errors carry engine-specific strings; log them, surface a generic
/// message.
fn store_failure(err: RepoError) -> DomainError {
    tracing::error!(error = %err, "post store operation failed");
    DomainError::Store("post storage operation failed".into())
}
