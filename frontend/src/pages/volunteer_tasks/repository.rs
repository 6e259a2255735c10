use super::utils::RemarkAuthor;
use crate::api::{ApiClient, ApiError, RemarksResponse, Task, TaskDetail, STATUS_COMPLETED};
use std::rc::Rc;

#[derive(Clone)]
pub struct VolunteerTasksRepository {
    client: Rc<ApiClient>,
}

impl VolunteerTasksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn my_tasks(&self, volunteer_id: i64) -> Result<Vec<TaskDetail>, ApiError> {
        self.client.get_volunteer_tasks(volunteer_id).await
    }

    pub async fn complete(&self, task_id: i64) -> Result<Task, ApiError> {
        self.client.update_task_status(task_id, STATUS_COMPLETED).await
    }
}

/// Reads and appends task remark logs for either author.
#[derive(Clone)]
pub struct RemarksRepository {
    client: Rc<ApiClient>,
}

impl RemarksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn history(&self, task_id: i64) -> Result<RemarksResponse, ApiError> {
        self.client.get_task_remarks(task_id).await
    }

    pub async fn add(
        &self,
        task_id: i64,
        author: RemarkAuthor,
        remarks: String,
    ) -> Result<RemarksResponse, ApiError> {
        match author {
            RemarkAuthor::Volunteer => self.client.add_volunteer_remarks(task_id, remarks).await,
            RemarkAuthor::Admin => self.client.add_admin_remarks(task_id, remarks).await,
        }
    }
}
