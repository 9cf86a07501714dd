use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, ListResponse, SalaryRecord},
};
use serde::Serialize;

impl ApiClient {
    pub async fn get_salaries(&self) -> Result<Vec<SalaryRecord>, ApiError> {
        let url = self.endpoint("/salaries").await;
        let body: ListResponse<SalaryRecord> =
            self.send_json(self.http_client().get(&url)).await?;
        Ok(body.data)
    }

    pub async fn create_salary<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), ApiError> {
        let url = self.endpoint("/salaries").await;
        self.send_discarding(self.http_client().post(&url).json(payload))
            .await
    }

    pub async fn update_salary<T: Serialize + ?Sized>(
        &self,
        id: &str,
        payload: &T,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/salaries/{}", path_segment(id)))
            .await;
        self.send_discarding(self.http_client().put(&url).json(payload))
            .await
    }

    pub async fn delete_salary(&self, id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/salaries/{}", path_segment(id)))
            .await;
        self.send_discarding(self.http_client().delete(&url)).await
    }
}
