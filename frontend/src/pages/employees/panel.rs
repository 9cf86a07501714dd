use super::{
    components::{form::EmployeeFormCard, table::EmployeeTable},
    view_model::use_employees_view_model,
};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let pending = vm.create_action.pending();
    let employees = Signal::derive(move || vm.employees.get().unwrap_or_default());
    let departments = Signal::derive(move || vm.departments.get().unwrap_or_default());
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Employee Management"</h1>
                <p class="text-gray-600 mt-2">"Add new employees to the system"</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <EmployeeFormCard
                    form=vm.form
                    departments=departments
                    message=vm.message
                    pending=pending
                    on_submit=on_submit
                />
                <EmployeeTable employees=employees />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_before_data_arrives() {
        let html = render_to_string(|| view! { <EmployeesPanel /> });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("All Employees ("));
        assert!(html.contains("No employees found"));
    }
}
