use crate::{
    api::SalaryRecord, components::empty_state::EmptyTableRow, utils::format::format_amount,
};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase";

#[component]
pub fn SalaryTable(
    #[prop(into)] salaries: Signal<Vec<SalaryRecord>>,
    on_edit: Callback<SalaryRecord>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="lg:col-span-2 card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">
                "All Salary Records (" {move || salaries.with(Vec::len)} ")"
            </h2>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=TH>"Department"</th>
                            <th class=TH>"Gross"</th>
                            <th class=TH>"Deduction"</th>
                            <th class=TH>"Net"</th>
                            <th class=TH>"Month"</th>
                            <th class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {move || {
                            let rows = salaries.get();
                            if rows.is_empty() {
                                return view! { <EmptyTableRow title="No salary records found" colspan=6 /> }
                                    .into_view();
                            }
                            rows.into_iter()
                                .map(|salary| {
                                    let id = salary.salary_id.clone();
                                    let record = salary.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-4 py-3 text-sm font-medium text-gray-900">
                                                {salary.department_name.unwrap_or_default()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{format_amount(salary.gross_salary)}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{format_amount(salary.total_deduction)}</td>
                                            <td class="px-4 py-3 text-sm font-medium text-[#0095f6]">{format_amount(salary.net_salary)}</td>
                                            <td class="px-4 py-3 text-sm text-gray-600">{salary.month}</td>
                                            <td class="px-4 py-3 text-sm">
                                                <div class="flex gap-2">
                                                    <button
                                                        type="button"
                                                        class="text-blue-600 hover:text-blue-900 font-medium"
                                                        on:click=move |_| on_edit.call(record.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="text-red-600 hover:text-red-900 font-medium"
                                                        on:click=move |_| on_delete.call(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </td>
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
