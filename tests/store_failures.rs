mod common;
use common::{create_test_app_with, spawn_test_app, TestAppClient, TestAppHandle};
use reqwest::StatusCode;
use serde_json::json;
use todo_service::{ErrorResponse, FailingStorage};

async fn failing_client() -> (TestAppHandle, TestAppClient) {
    let handle = spawn_test_app(create_test_app_with(FailingStorage::storage())).await;
    let client = TestAppClient::new(handle.address.clone());
    (handle, client)
}

async fn assert_internal_error(res: reqwest::Response, message: &str) {
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error = res.json::<ErrorResponse>().await.unwrap();
    assert!(!error.success);
    assert_eq!(error.error, message);
}

#[tokio::test]
async fn list_failure_is_internal_error() {
    let (_handle, client) = failing_client().await;
    assert_internal_error(client.get_all_todos().await, "Failed to list todos").await;
}

#[tokio::test]
async fn create_failure_is_internal_error() {
    let (_handle, client) = failing_client().await;
    let res = client.create_todo(json!({ "title": "A" })).await;
    assert_internal_error(res, "Failed to create todo").await;
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let (_handle, client) = failing_client().await;

    let res = client.create_todo(json!({})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.update_todo("1", json!({ "title": "" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_failure_is_internal_error() {
    let (_handle, client) = failing_client().await;
    assert_internal_error(client.get_todo("1").await, "Failed to get todo").await;
}

#[tokio::test]
async fn update_failure_is_internal_error() {
    let (_handle, client) = failing_client().await;
    let res = client.update_todo("1", json!({ "completed": true })).await;
    assert_internal_error(res, "Failed to update todo").await;
}

#[tokio::test]
async fn delete_failure_is_internal_error() {
    let (_handle, client) = failing_client().await;
    assert_internal_error(client.delete_todo("1").await, "Failed to delete todo").await;
}
