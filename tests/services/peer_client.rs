//! UserClient against real and misbehaving user services.

use std::time::{Duration, Instant};

use lab_services::{CallContext, PeerError, UserClient, UserLookup};

use crate::support::{
    start_canned_user_service, start_hanging_user_service, start_user_service, unreachable_url,
    CLIENT_TIMEOUT,
};

#[tokio::test]
async fn fetches_existing_user() {
    let (base, _) = start_user_service().await;
    let client = UserClient::new(&base, CLIENT_TIMEOUT).unwrap();

    let user = client
        .fetch_user(&CallContext::background(), 1)
        .await
        .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice Johnson");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let (base, _) = start_user_service().await;
    let client = UserClient::new(&base, CLIENT_TIMEOUT).unwrap();

    let err = client
        .fetch_user(&CallContext::background(), 999)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "user not found");
}

#[tokio::test]
async fn other_status_is_unexpected_status() {
    let base = start_canned_user_service(503, "{}").await;
    let client = UserClient::new(&base, CLIENT_TIMEOUT).unwrap();

    let err = client
        .fetch_user(&CallContext::background(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, PeerError::UnexpectedStatus(503)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn undecodable_body_is_decode_error() {
    let base = start_canned_user_service(200, r#"{"id": "one"}"#).await;
    let client = UserClient::new(&base, CLIENT_TIMEOUT).unwrap();

    let err = client
        .fetch_user(&CallContext::background(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, PeerError::Decode(_)));
}

#[tokio::test]
async fn refused_connection_is_connection_error() {
    let client = UserClient::new(&unreachable_url().await, CLIENT_TIMEOUT).unwrap();

    let err = client
        .fetch_user(&CallContext::background(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, PeerError::Connection(_)));
    assert_ne!(err.to_string(), "user not found");
}

#[tokio::test]
async fn client_timeout_bounds_hanging_service() {
    let base = start_hanging_user_service().await;
    let client = UserClient::new(&base, Duration::from_millis(300)).unwrap();

    let started = Instant::now();
    let err = client
        .fetch_user(&CallContext::with_timeout(Duration::from_secs(10)), 1)
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(matches!(err, PeerError::Connection(_)));
}

#[tokio::test]
async fn context_deadline_bounds_hanging_service() {
    let base = start_hanging_user_service().await;
    let client = UserClient::new(&base, Duration::from_secs(30)).unwrap();

    let started = Instant::now();
    let err = client
        .fetch_user(&CallContext::with_timeout(Duration::from_millis(300)), 1)
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(
        err.to_string(),
        "failed to connect to user service: deadline exceeded"
    );
}

#[tokio::test]
async fn cancellation_aborts_in_flight_call() {
    let base = start_hanging_user_service().await;
    let client = UserClient::new(&base, Duration::from_secs(30)).unwrap();

    let ctx = CallContext::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = client.fetch_user(&ctx, 1).await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(
        err.to_string(),
        "failed to connect to user service: request cancelled"
    );
}
