use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::DepartmentsPanel;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    view! { <DepartmentsPanel /> }
}
