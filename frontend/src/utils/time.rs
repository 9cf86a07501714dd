use chrono::{Local, NaiveDate};

/// Day/month/year, the way the printed report is dated.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn today_label() -> String {
    format_report_date(Local::now().date_naive())
}
