//! GraphQL schema - queries, mutations, and their response types.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use quill_core::PostService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the post service available to every resolver.
pub fn build_schema(post_service: Arc<PostService>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(post_service)
        .finish()
}

#[cfg(test)]
mod tests;
