use crate::api::{ApiClient, ApiError, Disaster, Task, TaskDetail, STATUS_ACTIVE};
use std::rc::Rc;

#[derive(Clone)]
pub struct VolunteerHomeRepository {
    client: Rc<ApiClient>,
}

impl VolunteerHomeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn active_disasters(&self) -> Result<Vec<Disaster>, ApiError> {
        self.client.list_disasters(Some(STATUS_ACTIVE)).await
    }

    pub async fn available_tasks(&self) -> Result<Vec<TaskDetail>, ApiError> {
        self.client.get_available_tasks().await
    }

    pub async fn my_tasks(&self, volunteer_id: i64) -> Result<Vec<TaskDetail>, ApiError> {
        self.client.get_volunteer_tasks(volunteer_id).await
    }

    pub async fn accept(&self, task_id: i64, volunteer_id: i64) -> Result<Task, ApiError> {
        self.client.accept_task(task_id, volunteer_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn accepting_a_taken_task_reports_conflict() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/tasks/5/accept")
                .query_param("volunteer_id", "2");
            then.status(409).json_body(serde_json::json!({
                "error": "Task is already assigned to a volunteer",
                "code": "CONFLICT"
            }));
        });

        let repo = VolunteerHomeRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let err = repo.accept(5, 2).await.unwrap_err();
        assert_eq!(err.code, "CONFLICT");
    }
}
