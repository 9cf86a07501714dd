use crate::{
    api::Department,
    components::{
        form_field::{department_options, SelectField, TextField},
        messages::{FlashMessage, MessageBanner},
    },
    pages::salaries::utils::{SalaryField, SalaryForm},
};
use leptos::{ev::SubmitEvent, *};

pub fn submit_label(pending: bool, editing: bool) -> &'static str {
    match (pending, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Add Salary",
    }
}

#[component]
pub fn SalaryFormCard(
    form: RwSignal<SalaryForm>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    #[prop(into)] message: Signal<Option<FlashMessage>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let value =
        move |field: SalaryField| Signal::derive(move || form.with(|f| f.get(field).to_string()));
    let setter = move |field: SalaryField| {
        Callback::new(move |input: String| form.update(|f| f.set(field, input)))
    };
    let net = Signal::derive(move || form.with(|f| f.net_salary().to_string()));
    let department_choices = Signal::derive(move || departments.with(|d| department_options(d)));

    view! {
        <div class="lg:col-span-1 card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">
                {move || if editing.get() { "Edit Salary Record" } else { "Add New Salary Record" }}
            </h2>
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <SelectField
                    label="Department"
                    name="DepartmentCode"
                    value=value(SalaryField::DepartmentCode)
                    on_change=setter(SalaryField::DepartmentCode)
                    placeholder="Select Department"
                    options=department_choices
                    required=true
                />
                <TextField
                    label="Gross Salary (RWF)"
                    name="GrossSalary"
                    input_type="number"
                    value=value(SalaryField::GrossSalary)
                    on_input=setter(SalaryField::GrossSalary)
                    placeholder="e.g., 300000"
                    required=true
                />
                <TextField
                    label="Total Deduction (RWF)"
                    name="TotalDeduction"
                    input_type="number"
                    value=value(SalaryField::TotalDeduction)
                    on_input=setter(SalaryField::TotalDeduction)
                    placeholder="e.g., 20000"
                    required=true
                />
                <TextField
                    label="Net Salary (Auto-calculated)"
                    name="NetSalary"
                    input_type="number"
                    value=net
                    on_input=Callback::new(|_| {})
                    readonly=true
                />
                <TextField
                    label="Month"
                    name="Month"
                    value=value(SalaryField::Month)
                    on_input=setter(SalaryField::Month)
                    placeholder="e.g., January 2025"
                    required=true
                />
                <div class="flex gap-2">
                    <button type="submit" class="btn-primary flex-1" disabled=move || pending.get()>
                        {move || submit_label(pending.get(), editing.get())}
                    </button>
                    <Show when=move || editing.get()>
                        <button type="button" class="btn-secondary" on:click=move |_| on_cancel.call(())>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(editing: bool) -> String {
        render_to_string(move || {
            view! {
                <SalaryFormCard
                    form=create_rw_signal(SalaryForm::default())
                    editing=Signal::derive(move || editing)
                    departments=Signal::derive(Vec::new)
                    message=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn create_mode_has_no_cancel() {
        let html = render(false);
        assert!(html.contains("Add New Salary Record"));
        assert!(html.contains("Add Salary"));
        assert!(!html.contains("Cancel"));
        assert!(html.contains("Net Salary (Auto-calculated)"));
        assert!(html.contains("readonly"));
    }

    #[test]
    fn edit_mode_offers_update_and_cancel() {
        let html = render(true);
        assert!(html.contains("Edit Salary Record"));
        assert!(html.contains("Update"));
        assert!(html.contains("Cancel"));
    }
}
