//! GraphQL mutation root.
//!
//! Mutations report expected failures (validation, not-found, store trouble)
//! through the `{ ok, error, post }` envelope instead of GraphQL errors, so a
//! failed mutation still resolves to data.

use std::sync::Arc;

use async_graphql::{Context, Object};
use quill_core::PostService;
use quill_core::domain::{NewPost, PostPatch};

use super::types::{CreatePostPayload, DeletePostPayload, UpdatePostPayload};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a post. All three fields are required and validated.
    async fn create_new_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author: String,
    ) -> CreatePostPayload {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        match service
            .create(NewPost {
                title,
                content,
                author,
            })
            .await
        {
            Ok(post) => CreatePostPayload {
                ok: true,
                error: None,
                post: Some(post.into()),
            },
            Err(e) => CreatePostPayload {
                ok: false,
                error: Some(e.to_string()),
                post: None,
            },
        }
    }

    /// Partial update: only supplied fields change. Supplying a field as an
    /// empty string is a validation failure, not a reset.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> UpdatePostPayload {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        let patch = PostPatch {
            title,
            content,
            author,
        };
        match service.update(id, patch).await {
            Ok(post) => UpdatePostPayload {
                ok: true,
                error: None,
                post: Some(post.into()),
            },
            Err(e) => UpdatePostPayload {
                ok: false,
                error: Some(e.to_string()),
                post: None,
            },
        }
    }

    /// Hard delete by id.
    async fn delete_post(&self, ctx: &Context<'_>, id: i32) -> DeletePostPayload {
        let service = ctx.data_unchecked::<Arc<PostService>>();
        match service.delete(id).await {
            Ok(()) => DeletePostPayload {
                ok: true,
                error: None,
            },
            Err(e) => DeletePostPayload {
                ok: false,
                error: Some(e.to_string()),
            },
        }
    }
}
