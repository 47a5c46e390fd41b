//! GraphQL query root.

use std::sync::Arc;

use async_graphql::{Context, Error, Object, Result};
use quill_core::PostService;

use super::types::{PaginatedPosts, PostObject};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every post, with no ordering guarantee.
    async fn all_posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        let posts = service
            .list_all()
            .await
            .map_err(|e| Error::new(e.to_string()))?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Single post lookup. A nonexistent id resolves to null, never an error.
    async fn post_by_id(&self, ctx: &Context<'_>, post_id: i32) -> Result<Option<PostObject>> {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        let post = service
            .get_by_id(post_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;
        Ok(post.map(Into::into))
    }

    /// Paginated posts, newest first. Bounds violations surface as
    /// query-level errors carrying the violated rule.
    async fn posts(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 10)] limit: i32,
    ) -> Result<PaginatedPosts> {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        let page = service
            .paginate(page.into(), limit.into())
            .await
            .map_err(|e| Error::new(e.to_string()))?;
        Ok(page.into())
    }
}
