use crate::components::form_field::{INPUT_CLASS, LABEL_CLASS};
use leptos::*;

#[component]
pub fn ReportFilter(
    month: RwSignal<String>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
    on_print: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card mb-6 print:hidden">
            <form
                class="flex flex-col sm:flex-row gap-4 items-end"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_apply.call(());
                }
            >
                <div class="flex-1">
                    <label class=LABEL_CLASS for="month">"Filter by Month"</label>
                    <input
                        id="month"
                        type="text"
                        class=INPUT_CLASS
                        placeholder="e.g., January 2025"
                        prop:value=move || month.get()
                        on:input=move |ev| month.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary">"Apply Filter"</button>
                <button type="button" class="btn-secondary" on:click=move |_| on_clear.call(())>
                    "Clear Filter"
                </button>
                <button type="button" class="btn-secondary" on:click=move |_| on_print.call(())>
                    "🖨️ Print"
                </button>
            </form>
        </div>
    }
}
