//! Task Commands
//!
//! `reqwest` implementation of the task gateway.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::{GatewayError, GatewayResult, Operation, TaskGateway};
use crate::config::AppConfig;
use crate::models::{NewTask, Task, TaskId};

/// Characters left as-is in an id path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub struct HttpTaskGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: &TaskId) -> String {
        let segment = id.to_string();
        format!("{}/tasks/{}", self.base_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }
}

/// Send a request and reject anything outside 2xx
async fn send(operation: Operation, request: reqwest::RequestBuilder) -> GatewayResult<reqwest::Response> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::transport(operation, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::status(operation, status.as_u16()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(operation: Operation, response: reqwest::Response) -> GatewayResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::transport(operation, e))
}

#[async_trait(?Send)]
impl TaskGateway for HttpTaskGateway {
    async fn list(&self) -> GatewayResult<Vec<Task>> {
        let url = self.tasks_url();
        log::debug!("[API] GET {}", url);
        let response = send(Operation::Load, self.client.get(&url)).await?;
        read_json(Operation::Load, response).await
    }

    async fn create(&self, title: &str) -> GatewayResult<Task> {
        let url = self.tasks_url();
        log::debug!("[API] POST {}", url);
        let request = self.client.post(&url).json(&NewTask { title });
        let response = send(Operation::Create, request).await?;
        read_json(Operation::Create, response).await
    }

    async fn update(&self, task: &Task) -> GatewayResult<Task> {
        let url = self.task_url(&task.id);
        log::debug!("[API] PUT {}", url);
        let response = send(Operation::Update, self.client.put(&url).json(task)).await?;
        read_json(Operation::Update, response).await
    }

    async fn delete(&self, id: &TaskId) -> GatewayResult<()> {
        let url = self.task_url(id);
        log::debug!("[API] DELETE {}", url);
        send(Operation::Delete, self.client.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FailureCause;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpTaskGateway {
        HttpTaskGateway::new(&AppConfig::new(&server.uri()))
    }

    #[tokio::test]
    async fn test_list_returns_tasks_in_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "title": "Second", "completed": true},
                {"id": 1, "title": "First", "completed": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = gateway_for(&server).list().await.expect("list failed");

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Second");
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].id, TaskId::Number(1));
    }

    #[tokio::test]
    async fn test_list_non_success_is_load_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = gateway_for(&server).list().await.unwrap_err();

        assert_eq!(err, GatewayError::status(Operation::Load, 500));
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_load_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = gateway_for(&server).list().await.unwrap_err();

        assert_eq!(err.operation, Operation::Load);
        assert!(matches!(err.cause, FailureCause::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_posts_title_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(body_json(json!({"title": "Buy milk"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!(
                {"id": "a1", "title": "Buy milk", "completed": false}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let created = gateway_for(&server).create("Buy milk").await.expect("create failed");

        assert_eq!(created.id, TaskId::Text("a1".to_string()));
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn test_create_rejected_is_create_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let err = gateway_for(&server).create("x").await.unwrap_err();

        assert_eq!(err, GatewayError::status(Operation::Create, 422));
    }

    #[tokio::test]
    async fn test_update_puts_full_task() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/42"))
            .and(body_json(json!({"id": 42, "title": "Renamed", "completed": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 42, "title": "Renamed", "completed": true}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let task = Task { id: TaskId::Number(42), title: "Renamed".to_string(), completed: true };
        let updated = gateway_for(&server).update(&task).await.expect("update failed");

        assert_eq!(updated, task);
    }

    #[tokio::test]
    async fn test_delete_encodes_id_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/tasks/abc%201"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        gateway_for(&server)
            .delete(&TaskId::from("abc 1"))
            .await
            .expect("delete failed");
    }

    #[tokio::test]
    async fn test_delete_missing_is_delete_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/tasks/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = gateway_for(&server).delete(&TaskId::Number(9)).await.unwrap_err();

        assert_eq!(err, GatewayError::status(Operation::Delete, 404));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_failure() {
        let gateway = HttpTaskGateway::new(&AppConfig::new("http://127.0.0.1:1"));

        let err = gateway.list().await.unwrap_err();

        assert_eq!(err.operation, Operation::Load);
        assert!(matches!(err.cause, FailureCause::Transport(_)));
    }
}
