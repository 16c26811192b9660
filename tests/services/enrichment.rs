//! Order service reads and writes against a live, missing, or stuck user service.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use serde_json::{json, Value};

use crate::support::{
    start_canned_user_service, start_hanging_user_service, start_order_service,
    start_order_service_with_timeouts, start_user_service, start_watched_hanging_user_service,
    unreachable_url,
};

const PEER_TIMEOUT: Duration = Duration::from_secs(3);

async fn get_order(base: &str, id: u64) -> (u16, Value) {
    let resp = reqwest::get(format!("{base}/orders/{id}")).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

async fn post_order(base: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}/orders"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn fetch_includes_user_when_available() {
    let (users, _) = start_user_service().await;
    let orders = start_order_service(&users, PEER_TIMEOUT).await;

    let (status, body) = get_order(&orders, 1).await;
    assert_eq!(status, 200);
    assert_eq!(body["product"], "Laptop");
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["user"]["name"], "Alice Johnson");
}

#[tokio::test]
async fn fetch_omits_user_when_user_is_missing() {
    let users = start_canned_user_service(404, "").await;
    let orders = start_order_service(&users, PEER_TIMEOUT).await;

    let (status, body) = get_order(&orders, 1).await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], 1);
    assert_eq!(body["product"], "Laptop");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn fetch_omits_user_when_service_unreachable() {
    let orders = start_order_service(&unreachable_url().await, PEER_TIMEOUT).await;

    let (status, body) = get_order(&orders, 2).await;
    assert_eq!(status, 200);
    assert_eq!(body["product"], "Mouse");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn fetch_omits_user_when_service_hangs() {
    let users = start_hanging_user_service().await;
    let orders = start_order_service(&users, Duration::from_millis(300)).await;

    let started = Instant::now();
    let (status, body) = get_order(&orders, 1).await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(status, 200);
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn client_disconnect_abandons_user_lookup() {
    let (users, abandoned) = start_watched_hanging_user_service().await;
    let long = Duration::from_secs(60);
    let orders = start_order_service_with_timeouts(&users, long, long, long).await;

    let impatient = reqwest::Client::builder()
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let result = impatient.get(format!("{orders}/orders/1")).send().await;
    assert!(result.unwrap_err().is_timeout());

    let deadline = Instant::now() + Duration::from_secs(5);
    while !abandoned.load(Ordering::SeqCst) && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(abandoned.load(Ordering::SeqCst));
}

#[tokio::test]
async fn create_rejects_unknown_user() {
    let (users, _) = start_user_service().await;
    let orders = start_order_service(&users, PEER_TIMEOUT).await;

    let (status, body) = post_order(
        &orders,
        json!({ "user_id": 42, "product": "Desk", "quantity": 1, "status": "pending" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("user not found"));

    let listed: Value = reqwest::get(format!("{orders}/orders"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_rejects_when_service_unreachable() {
    let orders = start_order_service(&unreachable_url().await, PEER_TIMEOUT).await;

    let (status, body) = post_order(&orders, json!({ "user_id": 1, "product": "Desk" })).await;
    assert_eq!(status, 400);

    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("user not found or service unavailable: failed to connect"));
}

#[tokio::test]
async fn create_gives_up_within_peer_timeout_when_service_hangs() {
    let users = start_hanging_user_service().await;
    let orders = start_order_service(&users, Duration::from_millis(500)).await;

    let started = Instant::now();
    let (status, body) = post_order(&orders, json!({ "user_id": 1, "product": "Desk" })).await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("deadline exceeded"));
}

#[tokio::test]
async fn create_accepts_known_user() {
    let (users, _) = start_user_service().await;
    let orders = start_order_service(&users, PEER_TIMEOUT).await;

    let (status, body) = post_order(
        &orders,
        json!({ "id": 50, "user_id": 2, "product": "Monitor", "quantity": 3, "status": "pending" }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["id"], 3);
    assert_eq!(body["product"], "Monitor");
    assert!(body.get("user").is_none());

    let (status, fetched) = get_order(&orders, 3).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["user"]["name"], "Bob Smith");
}

#[tokio::test]
async fn orders_see_users_created_later() {
    let (users, _) = start_user_service().await;
    let orders = start_order_service(&users, PEER_TIMEOUT).await;

    let (status, _) = post_order(&orders, json!({ "user_id": 3, "product": "Chair" })).await;
    assert_eq!(status, 400);

    let created: Value = reqwest::Client::new()
        .post(format!("{users}/users"))
        .json(&json!({ "name": "Carol", "email": "carol@example.com" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 3);

    let (status, body) = post_order(&orders, json!({ "user_id": 3, "product": "Chair" })).await;
    assert_eq!(status, 201);
    assert_eq!(body["user_id"], 3);
}
