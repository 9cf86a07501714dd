use crate::{
    api::SalaryRecord,
    utils::format::{amount_input_value, parse_amount},
};
use serde::Serialize;

/// Salary create/edit form. `net_salary` is derived and never typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalaryForm {
    department_code: String,
    gross_salary: String,
    total_deduction: String,
    net_salary: String,
    month: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryField {
    DepartmentCode,
    GrossSalary,
    TotalDeduction,
    Month,
}

impl Default for SalaryForm {
    fn default() -> Self {
        let mut form = Self {
            department_code: String::new(),
            gross_salary: String::new(),
            total_deduction: String::new(),
            net_salary: String::new(),
            month: String::new(),
        };
        form.recompute_net();
        form
    }
}

impl SalaryForm {
    /// Prefills the form from a listed record for editing.
    pub fn from_record(record: &SalaryRecord) -> Self {
        let mut form = Self {
            department_code: record.department_code.clone(),
            gross_salary: amount_input_value(record.gross_salary),
            total_deduction: amount_input_value(record.total_deduction),
            net_salary: String::new(),
            month: record.month.clone(),
        };
        form.recompute_net();
        form
    }

    pub fn get(&self, field: SalaryField) -> &str {
        match field {
            SalaryField::DepartmentCode => &self.department_code,
            SalaryField::GrossSalary => &self.gross_salary,
            SalaryField::TotalDeduction => &self.total_deduction,
            SalaryField::Month => &self.month,
        }
    }

    pub fn net_salary(&self) -> &str {
        &self.net_salary
    }

    pub fn set(&mut self, field: SalaryField, value: String) {
        match field {
            SalaryField::DepartmentCode => self.department_code = value,
            SalaryField::GrossSalary => {
                self.gross_salary = value;
                self.recompute_net();
            }
            SalaryField::TotalDeduction => {
                self.total_deduction = value;
                self.recompute_net();
            }
            SalaryField::Month => self.month = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn recompute_net(&mut self) {
        let net = parse_amount(&self.gross_salary) - parse_amount(&self.total_deduction);
        self.net_salary = amount_input_value(net);
    }
}
