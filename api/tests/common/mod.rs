//! Shared setup for the HTTP tests: a router seeded with the built-in fixture.

use std::sync::Arc;

use axum_test::TestServer;
use libris_api::application::http::server::http_server::{router, state};
use libris_api::args::Args;
use serde_json::Value;

pub const ALICE_ID: &str = "0190a000-0000-7000-8000-000000000001";
pub const BOB_ID: &str = "0190a000-0000-7000-8000-000000000002";
pub const CAROL_ID: &str = "0190a000-0000-7000-8000-000000000003";
pub const FRANK_HERBERT_ID: &str = "0190a000-0000-7000-8000-0000000000a1";

#[allow(dead_code)]
pub async fn test_server() -> TestServer {
    test_server_with_args(Args::default()).await
}

/// Id of the post whose title matches `title` exactly.
#[allow(dead_code)]
pub async fn post_id(server: &TestServer, title: &str) -> String {
    let body: Value = server
        .get("/posts")
        .add_query_param("search", title)
        .await
        .json();

    body["results"]
        .as_array()
        .expect("results is an array")
        .iter()
        .find(|post| post["title"] == title)
        .and_then(|post| post["id"].as_str())
        .expect("post exists")
        .to_string()
}

pub async fn test_server_with_args(args: Args) -> TestServer {
    let state = state(Arc::new(args)).await.expect("built-in fixture loads");
    let router = router(state).expect("router builds");

    TestServer::new(router).expect("test server starts")
}

/// `field` of every entry of `results`, as strings.
#[allow(dead_code)]
pub fn result_values(body: &Value, field: &str) -> Vec<String> {
    body["results"]
        .as_array()
        .expect("results is an array")
        .iter()
        .map(|item| item[field].as_str().unwrap_or_default().to_string())
        .collect()
}
