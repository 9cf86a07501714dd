use crate::{
    components::layout::LoadingSpinner,
    router::{route_decision, RouteDecision, DEFAULT_PATH, LOGIN_PATH},
    state::auth::use_auth,
    utils::navigation::navigate_to,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let RouteDecision::Redirect(target) = route_decision(DEFAULT_PATH, state.is_authenticated)
        {
            navigate_to(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Wraps the login screen: an authenticated session never sees it.
#[component]
pub fn RedirectWhenAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    create_effect(move |_| {
        if let RouteDecision::Redirect(target) = route_decision(LOGIN_PATH, is_authenticated.get()) {
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || !is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RedirectTo(#[prop(into)] path: Signal<&'static str>) -> impl IntoView {
    create_effect(move |_| navigate_to(path.get()));
}

#[cfg(test)]
mod tests {
    use super::should_render_children;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RedirectWhenAuthenticated, RequireAuth};
    use crate::test_support::helpers::provide_auth_state;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn login_screen_hidden_from_authenticated_session() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RedirectWhenAuthenticated>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectWhenAuthenticated>
            }
        });
        assert!(!html.contains("login-form"));
    }

    #[test]
    fn login_screen_shown_to_anonymous_session() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RedirectWhenAuthenticated>
                    {|| view! { <div>"login-form"</div> }}
                </RedirectWhenAuthenticated>
            }
        });
        assert!(html.contains("login-form"));
    }
}
