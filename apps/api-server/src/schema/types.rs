//! GraphQL object types and mutation payloads.

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use quill_core::domain::Post;
use quill_core::service::PostPage;

/// A blog post.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Post")]
pub struct PostObject {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub time_created: DateTime<Utc>,
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            time_created: post.time_created,
        }
    }
}

/// Pagination metadata for the paginated posts query.
#[derive(Debug, Clone, SimpleObject)]
pub struct PaginationInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of posts plus metadata.
#[derive(Debug, Clone, SimpleObject)]
pub struct PaginatedPosts {
    pub posts: Vec<PostObject>,
    pub pagination: PaginationInfo,
}

impl From<PostPage> for PaginatedPosts {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.items.into_iter().map(Into::into).collect(),
            pagination: PaginationInfo {
                current_page: page.current_page,
                total_pages: page.total_pages,
                total_count: page.total_count,
                has_next_page: page.has_next_page,
                has_previous_page: page.has_previous_page,
            },
        }
    }
}

/// Envelope for `createNewPost`. Expected failures (validation) land here as
/// `ok: false` rather than as GraphQL errors.
#[derive(Debug, Clone, SimpleObject)]
pub struct CreatePostPayload {
    pub ok: bool,
    pub error: Option<String>,
    pub post: Option<PostObject>,
}

/// Envelope for `updatePost`.
#[derive(Debug, Clone, SimpleObject)]
pub struct UpdatePostPayload {
    pub ok: bool,
    pub error: Option<String>,
    pub post: Option<PostObject>,
}

/// Envelope for `deletePost`.
#[derive(Debug, Clone, SimpleObject)]
pub struct DeletePostPayload {
    pub ok: bool,
    pub error: Option<String>,
}
