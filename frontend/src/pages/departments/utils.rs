use serde::Serialize;

/// Create-department form. Values are sent exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartmentForm {
    pub department_code: String,
    pub department_name: String,
    pub gross_salary: String,
    pub total_deduction: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    Code,
    Name,
    GrossSalary,
    TotalDeduction,
}

impl DepartmentForm {
    pub fn get(&self, field: DepartmentField) -> &str {
        match field {
            DepartmentField::Code => &self.department_code,
            DepartmentField::Name => &self.department_name,
            DepartmentField::GrossSalary => &self.gross_salary,
            DepartmentField::TotalDeduction => &self.total_deduction,
        }
    }

    pub fn set(&mut self, field: DepartmentField, value: String) {
        match field {
            DepartmentField::Code => self.department_code = value,
            DepartmentField::Name => self.department_name = value,
            DepartmentField::GrossSalary => self.gross_salary = value,
            DepartmentField::TotalDeduction => self.total_deduction = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
