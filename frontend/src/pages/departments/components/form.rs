use crate::{
    components::{
        form_field::TextField,
        messages::{FlashMessage, MessageBanner},
    },
    pages::departments::utils::{DepartmentField, DepartmentForm},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DepartmentFormCard(
    form: RwSignal<DepartmentForm>,
    #[prop(into)] message: Signal<Option<FlashMessage>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let value = move |field: DepartmentField| {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };
    let setter = move |field: DepartmentField| {
        Callback::new(move |input: String| form.update(|f| f.set(field, input)))
    };

    view! {
        <div class="card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">"Add New Department"</h2>
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <TextField
                    label="Department Code"
                    name="DepartmentCode"
                    value=value(DepartmentField::Code)
                    on_input=setter(DepartmentField::Code)
                    placeholder="e.g., CW, ST, MC"
                    required=true
                />
                <TextField
                    label="Department Name"
                    name="DepartmentName"
                    value=value(DepartmentField::Name)
                    on_input=setter(DepartmentField::Name)
                    placeholder="e.g., Carwash"
                    required=true
                />
                <TextField
                    label="Gross Salary (RWF)"
                    name="GrossSalary"
                    input_type="number"
                    value=value(DepartmentField::GrossSalary)
                    on_input=setter(DepartmentField::GrossSalary)
                    placeholder="e.g., 300000"
                    required=true
                />
                <TextField
                    label="Total Deduction (RWF)"
                    name="TotalDeduction"
                    input_type="number"
                    value=value(DepartmentField::TotalDeduction)
                    on_input=setter(DepartmentField::TotalDeduction)
                    placeholder="e.g., 20000"
                    required=true
                />
                <button type="submit" class="btn-primary w-full" disabled=move || pending.get()>
                    {move || if pending.get() { "Adding..." } else { "Add Department" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pending_submit_is_disabled_and_relabelled() {
        let html = render_to_string(|| {
            view! {
                <DepartmentFormCard
                    form=create_rw_signal(DepartmentForm::default())
                    message=Signal::derive(|| Some(FlashMessage::error("Failed to create department")))
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add New Department"));
        assert!(html.contains("Adding..."));
        assert!(html.contains("Failed to create department"));
    }
}
