use crate::{
    api::Employee, components::empty_state::EmptyTableRow,
    pages::employees::utils::phone_label,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase";

#[component]
pub fn EmployeeTable(#[prop(into)] employees: Signal<Vec<Employee>>) -> impl IntoView {
    view! {
        <div class="lg:col-span-2 card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">
                "All Employees (" {move || employees.with(Vec::len)} ")"
            </h2>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"Emp #"</th>
                            <th class=TH>"Name"</th>
                            <th class=TH>"Position"</th>
                            <th class=TH>"Department"</th>
                            <th class=TH>"Phone"</th>
                            <th class=TH>"Gender"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {move || {
                            let rows = employees.get();
                            if rows.is_empty() {
                                return view! { <EmptyTableRow title="No employees found" colspan=6 /> }
                                    .into_view();
                            }
                            rows.into_iter()
                                .map(|emp| {
                                    let name = emp.full_name();
                                    let phone = phone_label(emp.telephone.as_deref()).to_string();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-4 py-3 text-sm font-medium text-gray-900">{emp.employee_number}</td>
                                            <td class="px-4 py-3 text-sm text-gray-900">{name}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{emp.position}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{emp.department_name.unwrap_or_default()}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{phone}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{emp.gender}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
