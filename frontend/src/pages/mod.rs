pub mod departments;
pub mod employees;
pub mod login;
pub mod reports;
pub mod salaries;
