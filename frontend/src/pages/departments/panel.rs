use super::{
    components::{form::DepartmentFormCard, list::DepartmentList},
    view_model::use_departments_view_model,
};
use leptos::*;

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let vm = use_departments_view_model();
    let pending = vm.create_action.pending();
    let departments = Signal::derive(move || vm.departments.get().unwrap_or_default());
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Department Management"</h1>
                <p class="text-gray-600 mt-2">"Add new departments to the system"</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <DepartmentFormCard
                    form=vm.form
                    message=vm.message
                    pending=pending
                    on_submit=on_submit
                />
                <DepartmentList departments=departments />
            </div>
        </div>
    }
}
