use crate::{
    api::Department,
    components::{
        form_field::{department_options, SelectField, TextField},
        messages::{FlashMessage, MessageBanner},
    },
    pages::employees::utils::{EmployeeField, EmployeeForm, GENDER_OPTIONS},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeFormCard(
    form: RwSignal<EmployeeForm>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    #[prop(into)] message: Signal<Option<FlashMessage>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let value =
        move |field: EmployeeField| Signal::derive(move || form.with(|f| f.get(field).to_string()));
    let setter = move |field: EmployeeField| {
        Callback::new(move |input: String| form.update(|f| f.set(field, input)))
    };
    let gender_options = Signal::derive(|| {
        GENDER_OPTIONS
            .iter()
            .map(|gender| (gender.to_string(), gender.to_string()))
            .collect::<Vec<_>>()
    });
    let department_choices = Signal::derive(move || departments.with(|d| department_options(d)));

    view! {
        <div class="lg:col-span-1 card">
            <h2 class="text-xl font-bold text-gray-900 mb-6">"Add New Employee"</h2>
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <TextField
                    label="Employee Number"
                    name="EmployeeNumber"
                    value=value(EmployeeField::EmployeeNumber)
                    on_input=setter(EmployeeField::EmployeeNumber)
                    placeholder="e.g., EMP001"
                    required=true
                />
                <TextField
                    label="First Name"
                    name="FirstName"
                    value=value(EmployeeField::FirstName)
                    on_input=setter(EmployeeField::FirstName)
                    required=true
                />
                <TextField
                    label="Last Name"
                    name="LastName"
                    value=value(EmployeeField::LastName)
                    on_input=setter(EmployeeField::LastName)
                    required=true
                />
                <TextField
                    label="Position"
                    name="Position"
                    value=value(EmployeeField::Position)
                    on_input=setter(EmployeeField::Position)
                    placeholder="e.g., Mechanic, Cashier"
                    required=true
                />
                <TextField
                    label="Address"
                    name="Address"
                    value=value(EmployeeField::Address)
                    on_input=setter(EmployeeField::Address)
                />
                <TextField
                    label="Telephone"
                    name="Telephone"
                    input_type="tel"
                    value=value(EmployeeField::Telephone)
                    on_input=setter(EmployeeField::Telephone)
                    placeholder="e.g., +250788123456"
                />
                <SelectField
                    label="Gender"
                    name="Gender"
                    value=value(EmployeeField::Gender)
                    on_change=setter(EmployeeField::Gender)
                    placeholder="Select Gender"
                    options=gender_options
                    required=true
                />
                <TextField
                    label="Hired Date"
                    name="HiredDate"
                    input_type="date"
                    value=value(EmployeeField::HiredDate)
                    on_input=setter(EmployeeField::HiredDate)
                    required=true
                />
                <SelectField
                    label="Department"
                    name="DepartmentCode"
                    value=value(EmployeeField::DepartmentCode)
                    on_change=setter(EmployeeField::DepartmentCode)
                    placeholder="Select Department"
                    options=department_choices
                    required=true
                />
                <button type="submit" class="btn-primary w-full" disabled=move || pending.get()>
                    {move || if pending.get() { "Adding..." } else { "Add Employee" }}
                </button>
            </form>
        </div>
    }
}
