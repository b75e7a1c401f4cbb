//! Integration tests for work routes.

mod common;

use common::TestHarness;
use serde_json::json;

async fn post_work(
    client: &reqwest::Client,
    addr: std::net::SocketAddr,
    title: &str,
    description: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("http://{addr}/works/"))
        .json(&json!({ "title": title, "description": description }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn create_user_then_work_end_to_end() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/users/"))
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let created = post_work(&client, addr, "Sketch", "pencil on paper").await;
    assert_eq!(created["id"], 1);

    let resp = client
        .get(format!("http://{addr}/works/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({ "id": 1, "title": "Sketch", "description": "pencil on paper", "user_id": 1 })
    );
}

#[tokio::test]
async fn create_without_owner_rejected() {
    let (h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/works/"))
        .json(&json!({ "title": "Orphan", "description": "no owner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let conn = h.conn();
    assert_eq!(folio_db::queries::works::count_works(&conn).unwrap(), 0);
}

#[tokio::test]
async fn create_requires_both_fields() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/works"))
        .json(&json!({ "title": "Untitled" }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn list_works_skip_and_limit() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    for title in ["first", "second", "third"] {
        h.create_work(title, "d");
    }
    let client = reqwest::Client::new();

    let all: Vec<serde_json::Value> = client
        .get(format!("http://{addr}/works/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let page: Vec<serde_json::Value> = client
        .get(format!("http://{addr}/works/?skip=1&limit=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["title"], "second");

    let past_end: Vec<serde_json::Value> = client
        .get(format!("http://{addr}/works/?skip=10"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn default_limit_is_ten() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    for i in 0..12 {
        h.create_work(&format!("w{i}"), "d");
    }

    let page: Vec<serde_json::Value> = reqwest::get(format!("http://{addr}/works/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 10);
}

#[tokio::test]
async fn get_missing_work_is_404() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/works/7")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["detail"], "Work not found");
}

#[tokio::test]
async fn update_replaces_both_fields() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    let work = h.create_work("Old", "old text");
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("http://{addr}/works/{}", work.id))
        .json(&json!({ "title": "New", "description": "new text" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "New");
    assert_eq!(json["description"], "new text");
    assert_eq!(json["user_id"], 1);

    let conn = h.conn();
    let stored = folio_db::queries::works::get_work(&conn, work.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "New");
    assert_eq!(stored.description, "new text");
}

#[tokio::test]
async fn update_missing_work_is_404() {
    let (_h, addr) = TestHarness::with_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("http://{addr}/works/5"))
        .json(&json!({ "title": "t", "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_echoes_then_404() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    let work = h.create_work("Gone", "soon");
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("http://{addr}/works/{}", work.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["title"], "Gone");
    assert_eq!(json["id"], work.id.get());

    let resp = client
        .get(format!("http://{addr}/works/{}", work.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("http://{addr}/works/{}", work.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn overlong_title_rejected() {
    let (h, addr) = TestHarness::with_server().await;
    h.create_user("alice");
    let work = h.create_work("Short", "d");
    let client = reqwest::Client::new();
    let long = "t".repeat(121);

    let resp = client
        .post(format!("http://{addr}/works/"))
        .json(&json!({ "title": long, "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .put(format!("http://{addr}/works/{}", work.id))
        .json(&json!({ "title": long, "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("http://{addr}/works/"))
        .json(&json!({ "title": "t".repeat(120), "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let conn = h.conn();
    let stored = folio_db::queries::works::get_work(&conn, work.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Short");
}
