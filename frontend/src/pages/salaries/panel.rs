use super::{
    components::{form::SalaryFormCard, table::SalaryTable},
    view_model::{use_salaries_view_model, DELETE_PROMPT},
};
use crate::{api::SalaryRecord, components::confirm_dialog::ConfirmDialog, utils::window};
use leptos::*;

#[component]
pub fn SalariesPanel() -> impl IntoView {
    let vm = use_salaries_view_model();
    let pending = vm.save_action.pending();
    let delete_pending = vm.delete_action.pending();
    let salaries = Signal::derive(move || vm.salaries.get().unwrap_or_default());
    let departments = Signal::derive(move || vm.departments.get().unwrap_or_default());
    let editing = Signal::derive(move || vm.editing_id.with(Option::is_some));
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));

    let on_submit = Callback::new(move |_| vm.submit());
    let on_cancel = Callback::new(move |_| vm.cancel_edit());
    let on_edit = Callback::new(move |record: SalaryRecord| {
        vm.start_edit(&record);
        window::scroll_to_top();
    });
    let on_delete = Callback::new(move |id: String| vm.request_delete(id));
    let on_confirm_delete = Callback::new(move |_| vm.confirm_delete());
    let on_cancel_delete = Callback::new(move |_| vm.cancel_delete());

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Salary Management"</h1>
                <p class="text-gray-600 mt-2">"Manage employee salary records with full CRUD operations"</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <SalaryFormCard
                    form=vm.form
                    editing=editing
                    departments=departments
                    message=vm.message
                    pending=pending
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
                <SalaryTable salaries=salaries on_edit=on_edit on_delete=on_delete />
            </div>
            <ConfirmDialog
                is_open=confirm_open
                title="Delete Salary Record"
                message=DELETE_PROMPT
                confirm_label="Delete"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </div>
    }
}
