use super::{
    client::ApiClient,
    types::{ApiError, RemarksPayload, RemarksResponse, Task, TaskDetail},
};

impl ApiClient {
    pub async fn get_all_tasks(&self) -> Result<Vec<TaskDetail>, ApiError> {
        self.get_json("/tasks").await
    }

    pub async fn get_available_tasks(&self) -> Result<Vec<TaskDetail>, ApiError> {
        self.get_json("/tasks/available").await
    }

    pub async fn get_volunteer_tasks(&self, volunteer_id: i64) -> Result<Vec<TaskDetail>, ApiError> {
        self.get_json(&format!("/tasks/volunteer/{}", volunteer_id))
            .await
    }

    pub async fn accept_task(&self, task_id: i64, volunteer_id: i64) -> Result<Task, ApiError> {
        let url = self.url(&format!("/tasks/{}/accept", task_id)).await;
        let response = self
            .send(
                self.http_client()
                    .post(url)
                    .query(&[("volunteer_id", volunteer_id)]),
            )
            .await?;
        Self::decode(response).await
    }

    pub async fn update_task_status(&self, task_id: i64, status: &str) -> Result<Task, ApiError> {
        let url = self.url(&format!("/tasks/{}/status", task_id)).await;
        let response = self
            .send(self.http_client().put(url).query(&[("status", status)]))
            .await?;
        Self::decode(response).await
    }

    pub async fn add_volunteer_remarks(
        &self,
        task_id: i64,
        remarks: String,
    ) -> Result<RemarksResponse, ApiError> {
        self.post_json(
            &format!("/tasks/{}/volunteer-remarks", task_id),
            &RemarksPayload { remarks },
        )
        .await
    }

    pub async fn add_admin_remarks(
        &self,
        task_id: i64,
        remarks: String,
    ) -> Result<RemarksResponse, ApiError> {
        self.post_json(
            &format!("/tasks/{}/admin-remarks", task_id),
            &RemarksPayload { remarks },
        )
        .await
    }

    pub async fn get_task_remarks(&self, task_id: i64) -> Result<RemarksResponse, ApiError> {
        self.get_json(&format!("/tasks/{}/remarks", task_id)).await
    }
}
