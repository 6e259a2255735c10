use crate::api::{ApiClient, ApiError, Disaster};
use std::rc::Rc;

#[derive(Clone)]
pub struct DisasterUpdatesRepository {
    client: Rc<ApiClient>,
}

impl DisasterUpdatesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Disaster>, ApiError> {
        self.client.list_disasters(None).await
    }
}
