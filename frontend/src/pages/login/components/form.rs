use leptos::{ev::SubmitEvent, *};

const LOGIN_INPUT_CLASS: &str = "w-full px-2 py-2 bg-gray-50 border border-gray-300 rounded-sm text-xs focus:outline-none focus:border-gray-400";

#[component]
pub fn LoginForm(
    #[prop(into)] username: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <div class="w-full max-w-[350px]">
                <div class="bg-white border border-gray-300 rounded-sm py-10 px-10 mb-4">
                    <div class="text-center mb-8">
                        <h1 class="font-serif text-4xl mb-8 select-none">"SmartPark"</h1>
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="mb-4 text-center text-red-500 text-sm" role="alert">
                            {message}
                        </div>
                    })}

                    <form class="space-y-2" on:submit=move |ev| on_submit.call(ev)>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            autocomplete="username"
                            class=LOGIN_INPUT_CLASS
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| on_username_input.call(event_target_value(&ev))
                        />
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            class=LOGIN_INPUT_CLASS
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full bg-[#0095f6] hover:bg-[#1877f2] text-white font-semibold py-1.5 px-4 rounded-lg text-sm mt-4 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Logging in..." } else { "Log in" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(error: Option<&'static str>, pending: bool) -> String {
        render_to_string(move || {
            view! {
                <LoginForm
                    username=Signal::derive(|| "admin".to_string())
                    password=Signal::derive(String::new)
                    error=Signal::derive(move || error.map(str::to_string))
                    pending=Signal::derive(move || pending)
                    on_username_input=Callback::new(|_| {})
                    on_password_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_credentials_form() {
        let html = render(None, false);
        assert!(html.contains("SmartPark"));
        assert!(html.contains("Enter your username"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Log in"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn shows_error_and_pending_label() {
        let html = render(Some("Invalid username or password"), true);
        assert!(html.contains("Invalid username or password"));
        assert!(html.contains("Logging in..."));
        assert!(html.contains("disabled"));
    }
}
