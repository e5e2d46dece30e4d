#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::{build_app, create_app, Profile, Service, TestStorage};

pub use server::{spawn_test_app, TestAppHandle};

pub async fn create_test_app() -> Router {
    let (app, _service) = create_app(Profile::Testing).await.unwrap();
    app
}

pub fn create_test_app_with(storage: TestStorage) -> Router {
    build_app(Service::new(storage.todo, storage.health, storage.close))
}

pub async fn spawn_client() -> (TestAppHandle, TestAppClient) {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());
    (handle, client)
}
