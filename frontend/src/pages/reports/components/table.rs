use crate::{
    components::empty_state::EmptyTableRow,
    pages::reports::utils::PayrollReport,
    utils::format::{format_amount, format_currency},
};
use leptos::*;

const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

#[component]
pub fn PayrollTable(report: PayrollReport, #[prop(into)] generated_on: String) -> impl IntoView {
    let total = report.total();
    let count = report.rows.len();
    let has_rows = count > 0;

    let rows = if has_rows {
        report
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                view! {
                    <tr class="hover:bg-gray-50">
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{index + 1}</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{row.first_name}</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{row.last_name}</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">{row.position}</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">{row.department}</td>
                        <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-[#0095f6] text-right">
                            {format_amount(row.net_salary)}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    } else {
        view! {
            <EmptyTableRow title="No payroll data available for the selected period" colspan=6 />
        }
        .into_view()
    };

    view! {
        <div class="mb-6 pb-4 border-b border-gray-200 flex justify-end">
            <div class="text-right">
                <p class="text-sm text-gray-600">"Report Period"</p>
                <p class="font-semibold text-gray-900">{report.period}</p>
            </div>
        </div>
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=TH>"#"</th>
                        <th class=TH>"First Name"</th>
                        <th class=TH>"Last Name"</th>
                        <th class=TH>"Position"</th>
                        <th class=TH>"Department"</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                            "Net Salary (RWF)"
                        </th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">{rows}</tbody>
                <Show when=move || has_rows>
                    <tfoot class="bg-gray-50">
                        <tr>
                            <td colspan="5" class="px-6 py-4 text-right text-sm font-bold text-gray-900">"TOTAL:"</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-bold text-right">
                                {format_currency(total)}
                            </td>
                        </tr>
                    </tfoot>
                </Show>
            </table>
        </div>
        <Show when=move || has_rows>
            <div class="mt-6 pt-6 border-t border-gray-200 text-sm text-gray-600">
                <p><strong>"Report Summary:"</strong></p>
                <p>"Total Employees: " {count}</p>
                <p>"Total Payroll: " {format_currency(total)}</p>
                <p class="mt-4">"Generated on: " {generated_on.clone()}</p>
            </div>
        </Show>
    }
}
