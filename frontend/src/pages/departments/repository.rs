use super::utils::DepartmentForm;
use crate::api::{ApiClient, ApiError, Department};
use std::rc::Rc;

#[derive(Clone)]
pub struct DepartmentsRepository {
    client: Rc<ApiClient>,
}

impl DepartmentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.get_departments().await
    }

    pub async fn create_department(&self, form: &DepartmentForm) -> Result<(), ApiError> {
        self.client.create_department(form).await
    }
}
