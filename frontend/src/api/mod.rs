mod auth;
pub mod client;
mod departments;
mod employees;
mod reports;
mod salaries;
pub mod types;

pub use client::*;
pub use types::*;
