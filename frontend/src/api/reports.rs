use super::{
    client::ApiClient,
    types::{ApiError, PayrollReportResponse},
};

impl ApiClient {
    /// The month is free text ("January 2025") and is forwarded as typed; an
    /// empty string asks for every month.
    pub async fn get_monthly_payroll(&self, month: &str) -> Result<PayrollReportResponse, ApiError> {
        let url = self.endpoint("/reports/monthly-payroll").await;
        self.send_json(self.http_client().get(&url).query(&[("month", month)]))
            .await
    }
}
