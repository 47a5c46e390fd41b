//! GraphQL transport endpoints.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::schema::BlogSchema;

/// Execute a GraphQL operation.
///
/// POST /graphql
pub async fn execute(schema: web::Data<BlogSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Interactive GraphiQL explorer.
///
/// GET /graphql
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
