use super::{
    client::ApiClient,
    types::{ApiError, Employee, ListResponse},
};
use serde::Serialize;

impl ApiClient {
    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        let body: ListResponse<Employee> = self.send_json(self.http_client().get(&url)).await?;
        Ok(body.data)
    }

    pub async fn create_employee<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), ApiError> {
        let url = self.endpoint("/employees").await;
        self.send_discarding(self.http_client().post(&url).json(payload))
            .await
    }
}
