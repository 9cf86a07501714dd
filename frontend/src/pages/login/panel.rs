use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let username_input = Callback::new(move |value: String| vm.username.set(value));
    let password_input = Callback::new(move |value: String| vm.password.set(value));

    view! {
        <LoginForm
            username=vm.username
            password=vm.password
            error=vm.error
            pending=pending
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_empty_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Enter your password"));
        assert!(html.contains("Log in"));
    }
}
