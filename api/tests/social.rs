mod common;

use axum::http::StatusCode;
use common::{ALICE_ID, CAROL_ID, post_id, result_values, test_server};
use serde_json::{Value, json};

#[tokio::test]
async fn posts_default_to_newest_first() {
    let server = test_server().await;

    let body: Value = server.get("/posts").await.json();

    assert_eq!(body["count"], 5);
    assert_eq!(
        result_values(&body, "title"),
        [
            "Async in practice",
            "Garden update",
            "Reading list",
            "Rust tips",
            "Hello world",
        ]
    );
}

#[tokio::test]
async fn post_search_covers_title_and_content() {
    let server = test_server().await;

    let body: Value = server.get("/posts?search=rust").await.json();

    assert_eq!(
        result_values(&body, "title"),
        ["Async in practice", "Rust tips"]
    );
}

#[tokio::test]
async fn posts_filter_by_creation_window() {
    let server = test_server().await;

    let body: Value = server
        .get("/posts?created_after=2024-02-01&created_before=2024-03-10&ordering=created_at")
        .await
        .json();

    assert_eq!(
        result_values(&body, "title"),
        ["Reading list", "Garden update"]
    );
}

#[tokio::test]
async fn feed_contains_posts_of_followed_members() {
    let server = test_server().await;

    let body: Value = server
        .get(&format!("/members/{ALICE_ID}/feed"))
        .await
        .json();

    assert_eq!(body["count"], 4);
    assert_eq!(
        result_values(&body, "author_username"),
        ["bob", "carol", "carol", "bob"]
    );

    let empty: Value = server
        .get(&format!("/members/{CAROL_ID}/feed"))
        .await
        .json();
    assert_eq!(empty["count"], 0);
}

#[tokio::test]
async fn feed_of_unknown_member_is_not_found() {
    let server = test_server().await;

    server
        .get("/members/0190a000-0000-7000-8000-0000000000ff/feed")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn member_profile_lists_followers() {
    let server = test_server().await;

    let body: Value = server.get(&format!("/members/{CAROL_ID}")).await.json();

    assert_eq!(body["username"], "carol");
    assert_eq!(body["following"], json!([]));
    assert_eq!(body["followers"], json!([ALICE_ID]));
}

#[tokio::test]
async fn new_post_shows_up_in_followers_feed() {
    let server = test_server().await;

    let created = server
        .post("/posts")
        .json(&json!({
            "author": CAROL_ID,
            "title": "Seed swap",
            "content": "Bring your spare seeds on Saturday.",
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["author_username"], "carol");

    let post_id = created["id"].as_str().unwrap();
    server
        .get(&format!("/posts/{post_id}"))
        .await
        .assert_status_ok();

    let feed: Value = server
        .get(&format!("/members/{ALICE_ID}/feed"))
        .await
        .json();
    assert_eq!(feed["count"], 5);
    assert_eq!(feed["results"][0]["title"], "Seed swap");
}

#[tokio::test]
async fn post_by_unknown_member_is_rejected() {
    let server = test_server().await;

    server
        .post("/posts")
        .json(&json!({
            "author": "0190a000-0000-7000-8000-0000000000ff",
            "title": "Ghost",
            "content": "Boo.",
        }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post("/posts")
        .json(&json!({ "author": ALICE_ID, "title": "", "content": "x" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_metrics_respond() {
    let server = test_server().await;

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["books"], 10);
    assert_eq!(health["comments"], 3);

    server.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn put_replaces_and_patch_merges_a_post() {
    let server = test_server().await;
    let garden = post_id(&server, "Garden update").await;
    let path = format!("/posts/{garden}");

    server
        .put(&path)
        .json(&json!({ "title": "Garden update, week 2" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let replaced: Value = server
        .put(&path)
        .json(&json!({
            "title": "Garden update, week 2",
            "content": "Peppers next.",
        }))
        .await
        .json();
    assert_eq!(replaced["id"], garden.as_str());
    assert_eq!(replaced["content"], "Peppers next.");

    let patched: Value = server
        .patch(&path)
        .json(&json!({ "title": "Garden update, week 3" }))
        .await
        .json();
    assert_eq!(patched["title"], "Garden update, week 3");
    assert_eq!(patched["content"], "Peppers next.");
    assert_eq!(patched["author_username"], "carol");
}

#[tokio::test]
async fn deleting_a_post_removes_its_comments() {
    let server = test_server().await;
    let rust_tips = post_id(&server, "Rust tips").await;

    let deleted = server.delete(&format!("/posts/{rust_tips}")).await;
    deleted.assert_status_ok();
    let deleted: Value = deleted.json();
    assert_eq!(deleted["message"], "Post deleted successfully");
    assert_eq!(deleted["deleted_post"]["title"], "Rust tips");

    server
        .get(&format!("/posts/{rust_tips}/comments"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/posts/{rust_tips}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["posts"], 4);
    assert_eq!(health["comments"], 1);
}
