use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Accepts a JSON number or a numeric string (decimal columns come back quoted).
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        Value::String(s) => Ok(s.trim().parse::<f64>().unwrap_or(0.0)),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected amount, got {}",
            other
        ))),
    }
}

/// Record identifiers are integers on the backend but only ever used as path segments.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        other => Err(serde::de::Error::custom(format!(
            "expected identifier, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Department {
    pub department_code: String,
    pub department_name: String,
    #[serde(deserialize_with = "amount")]
    pub gross_salary: f64,
    #[serde(deserialize_with = "amount")]
    pub total_deduction: f64,
}

impl Department {
    pub fn net_salary(&self) -> f64 {
        self.gross_salary - self.total_deduction
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub hired_date: Option<String>,
    #[serde(default)]
    pub department_code: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "SalaryID", deserialize_with = "identifier")]
    pub salary_id: String,
    #[serde(rename = "DepartmentCode")]
    pub department_code: String,
    #[serde(rename = "DepartmentName", default)]
    pub department_name: Option<String>,
    #[serde(rename = "GrossSalary", deserialize_with = "amount")]
    pub gross_salary: f64,
    #[serde(rename = "TotalDeduction", deserialize_with = "amount")]
    pub total_deduction: f64,
    #[serde(rename = "NetSalary", deserialize_with = "amount")]
    pub net_salary: f64,
    #[serde(rename = "Month")]
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayrollRow {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(deserialize_with = "amount")]
    pub net_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReportResponse {
    #[serde(default = "Vec::new")]
    pub data: Vec<PayrollRow>,
    #[serde(default)]
    pub month: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
        }
    }

    /// Text shown to the user: the backend's message when it sent one, the
    /// page fallback otherwise.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.code.starts_with("HTTP_") && !self.error.trim().is_empty() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::http(409, "dup").code, "HTTP_409");
    }

    #[test]
    fn message_or_prefers_backend_text() {
        let backend = ApiError::http(400, "Department code already exists");
        assert_eq!(
            backend.message_or("Failed to create department"),
            "Department code already exists"
        );

        let silent = ApiError::http(500, "");
        assert_eq!(silent.message_or("Operation failed"), "Operation failed");

        let transport = ApiError::request_failed("Request failed: connection refused");
        assert_eq!(transport.message_or("Operation failed"), "Operation failed");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::http(404, "missing").into();
        assert_eq!(raw, "missing");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
