use super::utils::SalaryForm;
use crate::api::{ApiClient, ApiError, Department, SalaryRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct SalariesRepository {
    client: Rc<ApiClient>,
}

impl SalariesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_salaries(&self) -> Result<Vec<SalaryRecord>, ApiError> {
        self.client.get_salaries().await
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.get_departments().await
    }

    pub async fn create_salary(&self, form: &SalaryForm) -> Result<(), ApiError> {
        self.client.create_salary(form).await
    }

    pub async fn update_salary(&self, id: &str, form: &SalaryForm) -> Result<(), ApiError> {
        self.client.update_salary(id, form).await
    }

    pub async fn delete_salary(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_salary(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::salaries::utils::SalaryField;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn update_sends_recomputed_net_to_record_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/salaries/7").json_body(json!({
                    "DepartmentCode": "CW",
                    "GrossSalary": "300000",
                    "TotalDeduction": "25000",
                    "NetSalary": "275000",
                    "Month": "January 2025"
                }));
                then.status(200).json_body(json!({ "message": "updated" }));
            })
            .await;

        let mut form = SalaryForm::default();
        form.set(SalaryField::DepartmentCode, "CW".into());
        form.set(SalaryField::GrossSalary, "300000".into());
        form.set(SalaryField::TotalDeduction, "25000".into());
        form.set(SalaryField::Month, "January 2025".into());

        let repo = SalariesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        repo.update_salary("7", &form).await.unwrap();
        mock.assert_async().await;
    }
}
