use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{Value, json};

use quill_core::PostService;
use quill_core::domain::NewPost;
use quill_infra::InMemoryPostRepository;

use super::{BlogSchema, build_schema};

fn schema_with_service() -> (Arc<PostService>, BlogSchema) {
    let service = Arc::new(PostService::new(Arc::new(InMemoryPostRepository::new())));
    let schema = build_schema(service.clone());
    (service, schema)
}

async fn seed(service: &PostService, n: usize) {
    for i in 1..=n {
        service
            .create(NewPost {
                title: format!("Post {i}"),
                content: format!("Content {i}"),
                author: format!("Author {i}"),
            })
            .await
            .unwrap();
    }
}

async fn execute(schema: &BlogSchema, query: &str, variables: Value) -> async_graphql::Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

#[tokio::test]
async fn create_new_post_returns_persisted_entity() {
    let (_, schema) = schema_with_service();

    let resp = execute(
        &schema,
        r#"mutation {
            createNewPost(title: "Test Post", content: "Test content", author: "Tester") {
                ok
                error
                post { id title content author timeCreated }
            }
        }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let payload = &data["createNewPost"];
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["error"], Value::Null);
    assert_eq!(payload["post"]["title"], "Test Post");
    assert_eq!(payload["post"]["author"], "Tester");
    assert!(payload["post"]["timeCreated"].is_string());
}

#[tokio::test]
async fn create_new_post_with_blank_title_fails_in_envelope() {
    let (service, schema) = schema_with_service();

    let resp = execute(
        &schema,
        r#"mutation {
            createNewPost(title: "   ", content: "Content", author: "Author") {
                ok
                error
                post { id }
            }
        }"#,
        json!({}),
    )
    .await;

    // Validation is an expected failure: no GraphQL error, ok=false.
    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let payload = &data["createNewPost"];
    assert_eq!(payload["ok"], false);
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .contains("title cannot be empty")
    );
    assert_eq!(payload["post"], Value::Null);

    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_by_id_absent_resolves_to_null() {
    let (_, schema) = schema_with_service();

    let resp = execute(
        &schema,
        "query { postById(postId: 12345) { id title } }",
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["postById"], Value::Null);
}

#[tokio::test]
async fn all_posts_returns_every_row() {
    let (service, schema) = schema_with_service();
    seed(&service, 3).await;

    let resp = execute(&schema, "query { allPosts { id title } }", json!({})).await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["allPosts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn posts_first_page_newest_first() {
    let (service, schema) = schema_with_service();
    seed(&service, 5).await;

    let resp = execute(
        &schema,
        r#"query GetPosts($page: Int!, $limit: Int!) {
            posts(page: $page, limit: $limit) {
                posts { id title }
                pagination { currentPage totalPages totalCount hasNextPage hasPreviousPage }
            }
        }"#,
        json!({"page": 1, "limit": 3}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let page = &data["posts"];
    let ids: Vec<i64> = page["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4, 3]);
    assert_eq!(page["pagination"]["currentPage"], 1);
    assert_eq!(page["pagination"]["totalPages"], 2);
    assert_eq!(page["pagination"]["totalCount"], 5);
    assert_eq!(page["pagination"]["hasNextPage"], true);
    assert_eq!(page["pagination"]["hasPreviousPage"], false);
}

#[tokio::test]
async fn posts_second_page_holds_the_remainder() {
    let (service, schema) = schema_with_service();
    seed(&service, 5).await;

    let resp = execute(
        &schema,
        r#"query {
            posts(page: 2, limit: 3) {
                posts { id }
                pagination { totalPages hasNextPage hasPreviousPage }
            }
        }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let ids: Vec<i64> = data["posts"]["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(data["posts"]["pagination"]["hasNextPage"], false);
    assert_eq!(data["posts"]["pagination"]["hasPreviousPage"], true);
}

#[tokio::test]
async fn posts_empty_store_reports_one_page() {
    let (_, schema) = schema_with_service();

    let resp = execute(
        &schema,
        r#"query {
            posts {
                posts { id }
                pagination { currentPage totalPages totalCount hasNextPage hasPreviousPage }
            }
        }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert!(data["posts"]["posts"].as_array().unwrap().is_empty());
    assert_eq!(data["posts"]["pagination"]["totalPages"], 1);
    assert_eq!(data["posts"]["pagination"]["totalCount"], 0);
}

#[tokio::test]
async fn posts_bound_violations_are_query_errors() {
    let (_, schema) = schema_with_service();

    for (page, limit, phrase) in [
        (0, 10, "page must be >= 1"),
        (1, 0, "limit must be >= 1"),
        (1, 101, "limit cannot exceed 100"),
    ] {
        let resp = execute(
            &schema,
            r#"query GetPosts($page: Int!, $limit: Int!) {
                posts(page: $page, limit: $limit) { pagination { totalCount } }
            }"#,
            json!({"page": page, "limit": limit}),
        )
        .await;

        assert!(!resp.errors.is_empty());
        assert!(resp.errors[0].message.contains(phrase));
    }
}

#[tokio::test]
async fn update_post_changes_only_supplied_fields() {
    let (service, schema) = schema_with_service();
    seed(&service, 1).await;

    let resp = execute(
        &schema,
        r#"mutation {
            updatePost(id: 1, title: "Updated Title") {
                ok
                error
                post { title content author }
            }
        }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    let payload = &data["updatePost"];
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["post"]["title"], "Updated Title");
    assert_eq!(payload["post"]["content"], "Content 1");
    assert_eq!(payload["post"]["author"], "Author 1");
}

#[tokio::test]
async fn update_post_supplied_empty_field_is_rejected() {
    let (service, schema) = schema_with_service();
    seed(&service, 1).await;

    let resp = execute(
        &schema,
        r#"mutation { updatePost(id: 1, author: "") { ok error post { id } } }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["updatePost"]["ok"], false);
    assert!(
        data["updatePost"]["error"]
            .as_str()
            .unwrap()
            .contains("author cannot be empty")
    );

    // Nothing changed.
    let post = service.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(post.author, "Author 1");
}

#[tokio::test]
async fn update_post_missing_id_reports_not_found() {
    let (_, schema) = schema_with_service();

    let resp = execute(
        &schema,
        r#"mutation { updatePost(id: 99999, title: "x") { ok error post { id } } }"#,
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["updatePost"]["ok"], false);
    assert!(data["updatePost"]["error"].as_str().unwrap().contains("99999"));
}

#[tokio::test]
async fn delete_post_removes_the_row() {
    let (service, schema) = schema_with_service();
    seed(&service, 2).await;

    let resp = execute(
        &schema,
        "mutation { deletePost(id: 1) { ok error } }",
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["deletePost"]["ok"], true);

    assert!(service.get_by_id(1).await.unwrap().is_none());
    assert!(service.get_by_id(2).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_post_missing_id_reports_not_found() {
    let (_, schema) = schema_with_service();

    let resp = execute(
        &schema,
        "mutation { deletePost(id: 41) { ok error } }",
        json!({}),
    )
    .await;

    assert!(resp.errors.is_empty());
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["deletePost"]["ok"], false);
    assert!(data["deletePost"]["error"].as_str().unwrap().contains("41"));
}
