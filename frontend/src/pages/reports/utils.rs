use crate::api::{PayrollReportResponse, PayrollRow};
use serde::{Deserialize, Serialize};

pub const ALL_MONTHS: &str = "All Months";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    pub rows: Vec<PayrollRow>,
    pub period: String,
}

impl Default for PayrollReport {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            period: ALL_MONTHS.to_string(),
        }
    }
}

impl From<PayrollReportResponse> for PayrollReport {
    fn from(response: PayrollReportResponse) -> Self {
        Self {
            rows: response.data,
            period: period_label(response.month.as_deref()),
        }
    }
}

impl PayrollReport {
    pub fn total(&self) -> f64 {
        total_net_salary(&self.rows)
    }
}

pub fn total_net_salary(rows: &[PayrollRow]) -> f64 {
    rows.iter().map(|row| row.net_salary).sum()
}

pub fn period_label(month: Option<&str>) -> String {
    match month.map(str::trim) {
        Some(month) if !month.is_empty() => month.to_string(),
        _ => ALL_MONTHS.to_string(),
    }
}
