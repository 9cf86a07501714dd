use super::{
    components::{filter::ReportFilter, table::PayrollTable},
    view_model::use_reports_view_model,
};
use crate::utils::{time::today_label, window::print_page};
use leptos::*;

#[component]
fn PayrollLoading() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-[#0095f6]"></div>
            <p class="mt-4 text-gray-600">"Loading payroll data..."</p>
        </div>
    }
}

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let vm = use_reports_view_model();
    let loading = vm.report.loading();

    let on_apply = Callback::new(move |_| vm.apply_filter());
    let on_clear = Callback::new(move |_| vm.clear_filter());
    let on_print = Callback::new(|_| print_page());

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Monthly Employee Payroll Report"</h1>
                <p class="text-gray-600 mt-2">"View comprehensive payroll information"</p>
            </div>
            <ReportFilter
                month=vm.month_input
                on_apply=on_apply
                on_clear=on_clear
                on_print=on_print
            />
            <div class="card">
                {move || {
                    if loading.get() {
                        view! { <PayrollLoading /> }.into_view()
                    } else {
                        let report = vm.report.get().unwrap_or_default();
                        view! { <PayrollTable report=report generated_on=today_label() /> }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}
