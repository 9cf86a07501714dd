#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Department, Employee, PayrollRow, SalaryRecord};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn provide_auth_state(
        is_authenticated: bool,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn department(code: &str, name: &str, gross: f64, deduction: f64) -> Department {
        Department {
            department_code: code.into(),
            department_name: name.into(),
            gross_salary: gross,
            total_deduction: deduction,
        }
    }

    pub fn employee(number: &str, first: &str, last: &str) -> Employee {
        Employee {
            employee_number: number.into(),
            first_name: first.into(),
            last_name: last.into(),
            position: "Attendant".into(),
            address: None,
            telephone: None,
            gender: "Female".into(),
            hired_date: None,
            department_code: Some("CW".into()),
            department_name: Some("Carwash".into()),
        }
    }

    pub fn salary_record(id: &str, department: &str, gross: f64, deduction: f64) -> SalaryRecord {
        SalaryRecord {
            salary_id: id.into(),
            department_code: "CW".into(),
            department_name: Some(department.into()),
            gross_salary: gross,
            total_deduction: deduction,
            net_salary: gross - deduction,
            month: "January 2025".into(),
        }
    }

    pub fn payroll_row(first: &str, last: &str, net: f64) -> PayrollRow {
        PayrollRow {
            first_name: first.into(),
            last_name: last.into(),
            position: "Mechanic".into(),
            department: "Mechanic".into(),
            net_salary: net,
        }
    }
}
