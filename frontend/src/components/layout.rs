use crate::{
    router::LOGIN_PATH,
    state::auth::{self, use_auth},
    utils::navigation::navigate_to,
};
use leptos::*;
use leptos_router::use_location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/employees",
        label: "Employee",
        icon: "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
    },
    NavItem {
        path: "/departments",
        label: "Department",
        icon: "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
    },
    NavItem {
        path: "/salaries",
        label: "Salary",
        icon: "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    },
    NavItem {
        path: "/reports",
        label: "Reports",
        icon: "M9 17v-2m3 2v-4m3 4v-6m2 10H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
    },
];

const LOGOUT_ICON: &str =
    "M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1";

pub fn is_active(current_path: &str, path: &str) -> bool {
    current_path == path
}

#[component]
fn NavIcon(d: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "w-6 h-6".to_string()
    } else {
        class
    };
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d/>
        </svg>
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] current_path: Signal<String>,
    on_logout: Callback<()>,
    #[prop(into)] logout_pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <aside class="hidden lg:flex h-screen w-64 bg-white border-r border-gray-200 fixed left-0 top-0 flex-col z-10 print:hidden">
            <div class="p-6 mb-4">
                <h1 class="font-serif text-3xl select-none">"SmartPark"</h1>
            </div>
            <nav class="flex-1 px-3 space-y-2">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let active = move || is_active(&current_path.get(), item.path);
                        view! {
                            <a
                                href=item.path
                                class=move || {
                                    if active() {
                                        "flex items-center px-4 py-3 rounded-lg font-bold text-black"
                                    } else {
                                        "flex items-center px-4 py-3 rounded-lg text-gray-700 hover:bg-gray-50"
                                    }
                                }
                                aria-current=move || if active() { Some("page") } else { None }
                            >
                                <span class="mr-4"><NavIcon d=item.icon/></span>
                                <span class="text-base">{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="p-4 border-t border-gray-100">
                <button
                    type="button"
                    on:click=move |_| on_logout.call(())
                    disabled=move || logout_pending.get()
                    class="flex items-center w-full px-4 py-3 text-gray-700 hover:bg-gray-50 rounded-lg disabled:opacity-50"
                >
                    <span class="mr-4"><NavIcon d=LOGOUT_ICON/></span>
                    <span class="text-base">"Logout"</span>
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Navbar(
    #[prop(into)] current_path: Signal<String>,
    on_logout: Callback<()>,
    #[prop(into)] logout_pending: Signal<bool>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <nav class="lg:hidden bg-white shadow-lg print:hidden">
            <div class="px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <div class="w-10 h-10 bg-primary-600 text-white rounded-lg flex items-center justify-center font-bold text-xl">
                            "SP"
                        </div>
                        <span class="ml-3 text-xl font-bold text-gray-900">"SmartPark EPMS"</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-700 hover:bg-gray-100"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <NavIcon d="M4 6h16M4 12h16M4 18h16"/>
                        </button>
                        <button
                            type="button"
                            on:click=move |_| on_logout.call(())
                            disabled=move || logout_pending.get()
                            class="btn-danger flex items-center gap-2 disabled:opacity-50"
                        >
                            <NavIcon d=LOGOUT_ICON class="w-4 h-4"/>
                            <span class="hidden sm:inline">"Logout"</span>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="pb-4 flex flex-wrap gap-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let item = *item;
                                view! {
                                    <a
                                        href=item.path
                                        on:click=move |_| set_menu_open.set(false)
                                        class=move || {
                                            if is_active(&current_path.get(), item.path) {
                                                "px-3 py-1.5 rounded-lg text-sm font-medium bg-primary-100 text-primary-700"
                                            } else {
                                                "px-3 py-1.5 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-100"
                                            }
                                        }
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Navigation chrome around the routed page. Rendered under `<Router/>`.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(Ok(())) = logout_action.value().get() {
            navigate_to(LOGIN_PATH);
        }
    });
    let on_logout = Callback::new(move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    });

    view! {
        <div class="min-h-screen bg-[#fafafa]">
            <Show when=move || is_authenticated.get()>
                <Sidebar
                    current_path=current_path
                    on_logout=on_logout
                    logout_pending=logout_pending
                />
                <Navbar
                    current_path=current_path
                    on_logout=on_logout
                    logout_pending=logout_pending
                />
            </Show>
            <main class=move || {
                if is_authenticated.get() {
                    "lg:ml-64 p-4 lg:p-8 min-h-screen transition-all duration-300"
                } else {
                    "min-h-screen"
                }
            }>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-[#0095f6]"></div>
        </div>
    }
}
