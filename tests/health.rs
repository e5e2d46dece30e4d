mod common;
use common::{create_test_app_with, spawn_client, spawn_test_app, TestAppClient};
use reqwest::StatusCode;
use todo_service::{FailingStorage, HealthResponse};

#[tokio::test]
async fn health_reports_connected_database() {
    let (_handle, client) = spawn_client().await;

    let res = client.health().await;
    assert_eq!(res.status(), StatusCode::OK);

    let health = res.json::<HealthResponse>().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");
    assert!(health.error.is_none());
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let handle = spawn_test_app(create_test_app_with(FailingStorage::storage())).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client.health().await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let health = res.json::<HealthResponse>().await.unwrap();
    assert_eq!(health.status, "unhealthy");
    assert_eq!(health.database, "disconnected");
    assert!(health.error.is_some_and(|e| !e.is_empty()));
}
