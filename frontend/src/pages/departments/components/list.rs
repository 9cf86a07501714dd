use crate::{api::Department, components::empty_state::EmptyState, utils::format::format_currency};
use leptos::*;

#[component]
fn DepartmentCard(department: Department) -> impl IntoView {
    let net = department.net_salary();
    view! {
        <div class="border border-gray-200 rounded-lg p-4 hover:shadow-md transition">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-semibold text-gray-900">{department.department_name}</h3>
                    <p class="text-sm text-gray-600">"Code: " {department.department_code}</p>
                </div>
                <div class="text-right">
                    <p class="text-sm text-gray-600">"Gross: " {format_currency(department.gross_salary)}</p>
                    <p class="text-sm text-gray-600">"Deduction: " {format_currency(department.total_deduction)}</p>
                    <p class="text-sm font-medium text-[#0095f6]">"Net: " {format_currency(net)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DepartmentList(#[prop(into)] departments: Signal<Vec<Department>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">
                "Existing Departments (" {move || departments.with(Vec::len)} ")"
            </h2>
            <div class="space-y-3">
                {move || {
                    let items = departments.get();
                    if items.is_empty() {
                        view! { <EmptyState title="No departments found" /> }.into_view()
                    } else {
                        items
                            .into_iter()
                            .map(|department| view! { <DepartmentCard department=department /> })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}
