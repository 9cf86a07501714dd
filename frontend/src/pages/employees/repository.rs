use super::utils::EmployeeForm;
use crate::api::{ApiClient, ApiError, Department, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.get_employees().await
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.get_departments().await
    }

    pub async fn create_employee(&self, form: &EmployeeForm) -> Result<(), ApiError> {
        self.client.create_employee(form).await
    }
}
