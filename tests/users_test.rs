//! Integration tests for user routes.

mod common;

use common::TestHarness;

#[tokio::test]
async fn create_user() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/users/"))
        .json(&serde_json::json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/users/"))
        .json(&serde_json::json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let conn = h.conn();
    assert_eq!(folio_db::queries::users::count_users(&conn).unwrap(), 1);
}

#[tokio::test]
async fn overlong_username_rejected() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/users"))
        .json(&serde_json::json!({ "username": "x".repeat(81) }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn missing_username_rejected() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/users/"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn list_users_paginates() {
    let (h, addr) = TestHarness::with_server().await;
    for name in ["a", "b", "c"] {
        h.create_user(name);
    }
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/users/"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let users: Vec<serde_json::Value> = resp.json().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u["username"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let users: Vec<serde_json::Value> = client
        .get(format!("http://{addr}/users/?skip=1&limit=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "b");
}

#[tokio::test]
async fn negative_limit_rejected() {
    let (_h, addr) = TestHarness::with_server().await;
    let resp = reqwest::get(format!("http://{addr}/users/?limit=-1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn get_user_by_id() {
    let (h, addr) = TestHarness::with_server().await;
    let user = h.create_user("bob");

    let resp = reqwest::get(format!("http://{addr}/users/{}", user.id))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json, serde_json::json!({ "id": user.id.get(), "username": "bob" }));
}

#[tokio::test]
async fn get_missing_user_is_404() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/users/99")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["detail"], "User not found");
}

#[tokio::test]
async fn non_numeric_user_id_is_400() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/users/abc")).await.unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn list_works_of_user() {
    let (h, addr) = TestHarness::with_server().await;
    let owner = h.create_user("owner");
    h.create_work("One", "first");
    h.create_work("Two", "second");

    let resp = reqwest::get(format!("http://{addr}/users/{}/works", owner.id))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let works: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(works.len(), 2);
    assert!(works.iter().all(|w| w["user_id"] == owner.id.get()));

    let resp = reqwest::get(format!("http://{addr}/users/42/works"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
