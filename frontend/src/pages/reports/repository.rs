use super::utils::{period_label, PayrollReport};
use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_payroll(&self, month: &str) -> Result<PayrollReport, ApiError> {
        self.client
            .get_monthly_payroll(month)
            .await
            .map(PayrollReport::from)
    }

    /// Same as `fetch_payroll`, but a failed load is logged and reads as an
    /// empty report for the requested month.
    pub async fn fetch_payroll_or_empty(&self, month: &str) -> PayrollReport {
        match self.fetch_payroll(month).await {
            Ok(report) => report,
            Err(err) => {
                log::error!("Error fetching payroll: {}", err);
                PayrollReport {
                    rows: Vec::new(),
                    period: period_label(Some(month)),
                }
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo_for(server: &MockServer) -> ReportsRepository {
        ReportsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    #[tokio::test]
    async fn filtered_report_totals_returned_rows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/reports/monthly-payroll")
                    .query_param("month", "January 2025");
                then.status(200).json_body(json!({
                    "month": "January 2025",
                    "data": [
                        { "FirstName": "Aline", "LastName": "Uwase", "Position": "Cashier",
                          "Department": "Stock", "NetSalary": 100000 },
                        { "FirstName": "Eric", "LastName": "Mugisha", "Position": "Mechanic",
                          "Department": "Mechanic", "NetSalary": "150000.00" }
                    ]
                }));
            })
            .await;

        let report = repo_for(&server).fetch_payroll("January 2025").await.unwrap();
        assert_eq!(report.period, "January 2025");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total(), 250000.0);
    }

    #[tokio::test]
    async fn failed_load_reads_as_empty_report() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/reports/monthly-payroll");
                then.status(500).json_body(json!({ "message": "boom" }));
            })
            .await;

        let report = repo_for(&server).fetch_payroll_or_empty("").await;
        assert!(report.rows.is_empty());
        assert_eq!(report.period, "All Months");
    }

    #[tokio::test]
    async fn failed_filtered_load_keeps_the_requested_month() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/reports/monthly-payroll");
                then.status(500).json_body(json!({ "message": "boom" }));
            })
            .await;

        let report = repo_for(&server).fetch_payroll_or_empty("January 2025").await;
        assert!(report.rows.is_empty());
        assert_eq!(report.period, "January 2025");
    }
}
