mod common;
use common::spawn_client;
use reqwest::StatusCode;
use serde_json::Value;
use todo_service::ErrorResponse;

#[tokio::test]
async fn root_describes_service() {
    let (_handle, client) = spawn_client().await;

    let res = client.root().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["message"], "Todo API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["endpoints"]["todos"], "/api/todos");
    assert_eq!(body["endpoints"]["health"], "/api/health");
}

#[tokio::test]
async fn unknown_path_is_not_found_envelope() {
    let (_handle, client) = spawn_client().await;

    for path in ["nonexistent-endpoint", "api/todos/1/extra", "api"] {
        let res = client.get_path(path).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {path}");

        let error = res.json::<ErrorResponse>().await.unwrap();
        assert!(!error.success);
        assert_eq!(error.error, "Not found");
    }
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (_handle, client) = spawn_client().await;

    let res = client.get_path("api/openapi.json").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["info"]["title"], "Todo API");
    assert!(body["paths"]["/api/todos"]["post"].is_object());
}
