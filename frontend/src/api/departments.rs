use super::{
    client::ApiClient,
    types::{ApiError, Department, ListResponse},
};
use serde::Serialize;

impl ApiClient {
    pub async fn get_departments(&self) -> Result<Vec<Department>, ApiError> {
        let url = self.endpoint("/departments").await;
        let body: ListResponse<Department> = self.send_json(self.http_client().get(&url)).await?;
        Ok(body.data)
    }

    pub async fn create_department<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/departments").await;
        self.send_discarding(self.http_client().post(&url).json(payload))
            .await
    }
}
