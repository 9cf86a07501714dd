use leptos_router::{use_navigate, NavigateOptions};

/// Client-side navigation that replaces the current history entry. Must run
/// under a `<Router/>` owner.
pub fn navigate_to(path: &str) {
    let navigate = use_navigate();
    navigate(
        path,
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    );
}
