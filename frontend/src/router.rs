use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::{
        guard::{RedirectTo, RedirectWhenAuthenticated, RequireAuth},
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        departments::DepartmentsPage, employees::EmployeesPage, login::LoginPage,
        reports::ReportsPage, salaries::SalariesPage,
    },
    state::auth::{use_auth, AuthProvider},
};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PATH: &str = "/employees";

pub const ROUTE_PATHS: &[&str] = &[
    "/login",
    "/employees",
    "/departments",
    "/salaries",
    "/reports",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/employees", "/departments", "/salaries", "/reports"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
}

/// Where a request for `path` ends up given the session flag.
pub fn route_decision(path: &str, is_authenticated: bool) -> RouteDecision {
    let landing = if is_authenticated {
        DEFAULT_PATH
    } else {
        LOGIN_PATH
    };
    if path == LOGIN_PATH {
        return if is_authenticated {
            RouteDecision::Redirect(DEFAULT_PATH)
        } else {
            RouteDecision::Render
        };
    }
    if PROTECTED_ROUTE_PATHS.contains(&path) {
        return if is_authenticated {
            RouteDecision::Render
        } else {
            RouteDecision::Redirect(LOGIN_PATH)
        };
    }
    RouteDecision::Redirect(landing)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="SmartPark EPMS"/>
        <AuthProvider>
            <AppShell/>
        </AuthProvider>
    }
}

/// Holds the router back until the startup session check has resolved.
#[component]
fn AppShell() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_loading = create_memo(move |_| auth.get().loading);

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50">
                    <LoadingSpinner/>
                </div>
            }
        >
            <Router>
                <Layout>
                    <Routes>
                        <Route path="/login" view=PublicLogin/>
                        <Route path="/employees" view=ProtectedEmployees/>
                        <Route path="/departments" view=ProtectedDepartments/>
                        <Route path="/salaries" view=ProtectedSalaries/>
                        <Route path="/reports" view=ProtectedReports/>
                        <Route path="/*any" view=Landing/>
                    </Routes>
                </Layout>
            </Router>
        </Show>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <RedirectWhenAuthenticated><LoginPage/></RedirectWhenAuthenticated> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAuth><EmployeesPage/></RequireAuth> }
}

#[component]
fn ProtectedDepartments() -> impl IntoView {
    view! { <RequireAuth><DepartmentsPage/></RequireAuth> }
}

#[component]
fn ProtectedSalaries() -> impl IntoView {
    view! { <RequireAuth><SalariesPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn Landing() -> impl IntoView {
    let (auth, _) = use_auth();
    let location = use_location();
    let target = Signal::derive(move || {
        match route_decision(&location.pathname.get(), auth.get().is_authenticated) {
            RouteDecision::Redirect(path) => path,
            RouteDecision::Render => DEFAULT_PATH,
        }
    });
    view! { <RedirectTo path=target/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
        assert!(!PROTECTED_ROUTE_PATHS.contains(&LOGIN_PATH));
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn anonymous_users_are_sent_to_login_from_every_protected_path() {
        for path in PROTECTED_ROUTE_PATHS {
            assert_eq!(
                route_decision(path, false),
                RouteDecision::Redirect(LOGIN_PATH)
            );
            assert_eq!(route_decision(path, true), RouteDecision::Render);
        }
    }

    #[test]
    fn authenticated_users_skip_the_login_screen() {
        assert_eq!(
            route_decision(LOGIN_PATH, true),
            RouteDecision::Redirect(DEFAULT_PATH)
        );
        assert_eq!(route_decision(LOGIN_PATH, false), RouteDecision::Render);
    }

    #[test]
    fn root_and_unknown_paths_follow_the_session_flag() {
        for path in ["/", "/does-not-exist", "/employees/extra"] {
            assert_eq!(
                route_decision(path, true),
                RouteDecision::Redirect(DEFAULT_PATH)
            );
            assert_eq!(
                route_decision(path, false),
                RouteDecision::Redirect(LOGIN_PATH)
            );
        }
    }
}
