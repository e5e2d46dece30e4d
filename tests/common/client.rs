#![allow(dead_code)]
use reqwest::Url;
use serde_json::Value;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn todo_url(&self, todo_id: &str) -> Url {
        self.url.join("api/todos/").unwrap().join(todo_id).unwrap()
    }

    pub async fn root(&self) -> reqwest::Response {
        self.client.get(self.url.clone()).send().await.unwrap()
    }

    pub async fn get_path(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url.join(path).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn health(&self) -> reqwest::Response {
        self.get_path("api/health").await
    }

    pub async fn create_todo(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url.join("api/todos").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url.join("api/todos").unwrap())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_titled(&self, title: &str) -> Value {
        let res = self
            .create_todo(serde_json::json!({ "title": title }))
            .await;
        assert_eq!(res.status(), reqwest::StatusCode::CREATED);
        res.json::<Value>().await.unwrap()["data"].clone()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.get_path("api/todos").await
    }

    pub async fn get_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .get(self.todo_url(todo_id))
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, todo_id: &str, patch: Value) -> reqwest::Response {
        self.client
            .put(self.todo_url(todo_id))
            .json(&patch)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo_raw(&self, todo_id: &str, body: &'static str) -> reqwest::Response {
        self.client
            .put(self.todo_url(todo_id))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .delete(self.todo_url(todo_id))
            .send()
            .await
            .unwrap()
    }
}
