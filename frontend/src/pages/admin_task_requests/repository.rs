use crate::api::{ApiClient, ApiError, Task, TaskDetail, TaskRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminTaskRequestsRepository {
    client: Rc<ApiClient>,
}

impl AdminTaskRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<TaskRequest>, ApiError> {
        self.client.get_task_requests_by_status(status).await
    }

    pub async fn approve(&self, request_id: i64) -> Result<Task, ApiError> {
        self.client.approve_task_request(request_id).await
    }

    pub async fn reject(&self, request_id: i64) -> Result<TaskRequest, ApiError> {
        self.client.reject_task_request(request_id).await
    }

    pub async fn delete(&self, request_id: i64) -> Result<(), ApiError> {
        self.client.delete_task_request(request_id).await
    }

    pub async fn all_tasks(&self) -> Result<Vec<TaskDetail>, ApiError> {
        self.client.get_all_tasks().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> AdminTaskRequestsRepository {
        AdminTaskRequestsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn approving_returns_the_created_task() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/task-requests/8/approve");
            then.status(200).json_body(json!({
                "task_id": 30,
                "request_id": 8,
                "volunteer_id": null,
                "photo": "default.png",
                "status": "PENDING",
                "volunteer_remarks": null,
                "admin_remarks": null,
                "created_at": "2025-08-01T10:00:00Z",
                "deadline": "2025-08-08T10:00:00Z"
            }));
        });

        let task = repo(&server).approve(8).await.unwrap();
        assert_eq!(task.task_id, 30);
        assert_eq!(task.request_id, 8);
    }

    #[tokio::test]
    async fn reviewing_twice_reports_conflict() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/task-requests/8/reject");
            then.status(409).json_body(json!({
                "error": "Cannot change task request from REJECTED to REJECTED",
                "code": "CONFLICT"
            }));
        });

        let err = repo(&server).reject(8).await.unwrap_err();
        assert_eq!(err.code, "CONFLICT");
    }

    #[tokio::test]
    async fn delete_hits_the_request_path() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/task-requests/8");
            then.status(204);
        });

        repo(&server).delete(8).await.unwrap();
        assert_eq!(server.hits(DELETE, "/api/task-requests/8"), 1);
    }
}
