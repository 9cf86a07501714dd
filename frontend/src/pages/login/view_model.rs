use crate::api::{ApiError, LoginRequest};
use crate::router::DEFAULT_PATH;
use crate::state::auth;
use crate::utils::navigation::navigate_to;
use leptos::*;

pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
        });
    }
}

pub fn login_error_text(err: &ApiError) -> String {
    err.message_or(LOGIN_FALLBACK)
}

pub fn use_login_view_model() -> LoginViewModel {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    navigate_to(DEFAULT_PATH);
                }
                Err(err) => error.set(Some(login_error_text(&err))),
            }
        }
    });

    LoginViewModel {
        username,
        password,
        error,
        login_action,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.username.get().is_empty());
            assert!(vm.password.get().is_empty());
            assert!(!vm.login_action.pending().get());
        });
    }
}
