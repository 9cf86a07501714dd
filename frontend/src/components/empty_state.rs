use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <p class="text-gray-500 text-center py-8">{title}</p>
    }
}

/// Single full-width table row used when a listing came back empty.
#[component]
pub fn EmptyTableRow(#[prop(into)] title: String, colspan: u8) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-4 py-8 text-center text-gray-500">{title}</td>
        </tr>
    }
}
