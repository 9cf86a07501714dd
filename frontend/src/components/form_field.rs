use crate::api::Department;
use leptos::*;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-[#0095f6] focus:border-transparent";
pub const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

/// Labelled `<input>` bound to one form key.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let class = if readonly {
        format!("{} bg-gray-100", INPUT_CLASS)
    } else {
        INPUT_CLASS.to_string()
    };
    view! {
        <div>
            <label class=LABEL_CLASS for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                class=class
                placeholder=placeholder
                required=required
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

/// `(value, label)` pairs for a Department select.
pub fn department_options(departments: &[Department]) -> Vec<(String, String)> {
    departments
        .iter()
        .map(|dept| (dept.department_code.clone(), dept.department_name.clone()))
        .collect()
}

/// Labelled `<select>` with a blank first option.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS for=name>{label}</label>
            <select
                id=name
                name=name
                class=INPUT_CLASS
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_options_pair_code_with_name() {
        let departments = vec![Department {
            department_code: "MC".into(),
            department_name: "Mechanic".into(),
            gross_salary: 0.0,
            total_deduction: 0.0,
        }];
        assert_eq!(
            department_options(&departments),
            vec![("MC".to_string(), "Mechanic".to_string())]
        );
    }
}
