use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Process-wide session flag. `loading` is true only until the startup
/// session check resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        is_authenticated: false,
        loading: true,
    });

    let repo = login_repository();
    spawn_local(async move {
        resolve_session(&repo, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Any failure of the session check reads as "not authenticated".
pub async fn resolve_session(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    let is_authenticated = match repo.is_authenticated().await {
        Ok(flag) => flag,
        Err(err) => {
            log::debug!("session check failed: {}", err);
            false
        }
    };
    log::debug!("session check resolved: authenticated={}", is_authenticated);
    set_auth_state.set(AuthState {
        is_authenticated,
        loading: false,
    });
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    repo.login(request).await?;
    set_auth_state.update(|state| {
        state.is_authenticated = true;
        state.loading = false;
    });
    Ok(())
}

/// The flag only drops once the backend confirmed the logout; a failed call
/// is logged and leaves the session untouched.
pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match repo.logout().await {
        Ok(()) => {
            set_auth_state.update(|state| {
                state.is_authenticated = false;
                state.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            log::error!("Logout error: {}", err);
            Err(err)
        }
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
