mod common;

use axum::http::StatusCode;
use common::{ALICE_ID, BOB_ID, post_id, result_values, test_server};
use serde_json::{Value, json};

const UNKNOWN_ID: &str = "0190a000-0000-7000-8000-0000000000ff";

#[tokio::test]
async fn comments_of_a_post_are_newest_first() {
    let server = test_server().await;
    let rust_tips = post_id(&server, "Rust tips").await;

    let body: Value = server
        .get(&format!("/posts/{rust_tips}/comments"))
        .await
        .json();

    assert_eq!(body["count"], 2);
    assert_eq!(result_values(&body, "author_username"), ["carol", "alice"]);
    assert_eq!(body["next"], Value::Null);
}

#[tokio::test]
async fn comments_filter_search_and_paginate() {
    let server = test_server().await;
    let rust_tips = post_id(&server, "Rust tips").await;
    let path = format!("/posts/{rust_tips}/comments");

    let by_alice: Value = server
        .get(&path)
        .add_query_param("author", ALICE_ID)
        .await
        .json();
    assert_eq!(result_values(&by_alice, "author_username"), ["alice"]);

    let searched: Value = server.get(&format!("{path}?search=ITERATORS")).await.json();
    assert_eq!(result_values(&searched, "author_username"), ["carol"]);

    let paged: Value = server
        .get(&format!("{path}?ordering=author_username&page_size=1"))
        .await
        .json();
    assert_eq!(paged["count"], 2);
    assert_eq!(result_values(&paged, "author_username"), ["alice"]);
    assert_eq!(
        paged["next"],
        format!("{path}?ordering=author_username&page=2&page_size=1")
    );
}

#[tokio::test]
async fn comments_of_unknown_post_are_not_found() {
    let server = test_server().await;

    server
        .get(&format!("/posts/{UNKNOWN_ID}/comments"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post(&format!("/posts/{UNKNOWN_ID}/comments"))
        .json(&json!({ "author": ALICE_ID, "content": "Hello?" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_lifecycle() {
    let server = test_server().await;
    let reading_list = post_id(&server, "Reading list").await;
    let path = format!("/posts/{reading_list}/comments");

    let created = server
        .post(&path)
        .json(&json!({ "author": ALICE_ID, "content": "Adding both to mine." }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["author_username"], "alice");
    assert_eq!(created["post"], reading_list.as_str());
    let comment_id = created["id"].as_str().unwrap();

    let listed: Value = server.get(&path).await.json();
    assert_eq!(listed["count"], 2);
    assert_eq!(listed["results"][0]["id"], comment_id);

    let updated: Value = server
        .put(&format!("/comments/{comment_id}"))
        .json(&json!({ "content": "Adding all three to mine." }))
        .await
        .json();
    assert_eq!(updated["content"], "Adding all three to mine.");

    let fetched: Value = server
        .get(&format!("/comments/{comment_id}"))
        .await
        .json();
    assert_eq!(fetched["content"], "Adding all three to mine.");

    let deleted = server.delete(&format!("/comments/{comment_id}")).await;
    deleted.assert_status_ok();
    let deleted: Value = deleted.json();
    assert_eq!(deleted["message"], "Comment deleted successfully");
    assert_eq!(deleted["deleted_comment"]["id"], comment_id);

    server
        .get(&format!("/comments/{comment_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_comments_are_rejected() {
    let server = test_server().await;
    let rust_tips = post_id(&server, "Rust tips").await;
    let path = format!("/posts/{rust_tips}/comments");

    server
        .post(&path)
        .json(&json!({ "author": BOB_ID, "content": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(&path)
        .json(&json!({ "author": UNKNOWN_ID, "content": "Who am I?" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .put(&format!("/comments/{UNKNOWN_ID}"))
        .json(&json!({ "content": "Nothing here." }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
