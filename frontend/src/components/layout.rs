use crate::{
    components::toast::ToastHost,
    config,
    state::auth::{self, use_auth},
};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

pub const PUBLIC_NAV: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/houses", "Houses"),
    ("/tours", "Tours"),
    ("/faq", "FAQ"),
];

pub const ADMIN_NAV: [(&str, &str); 8] = [
    ("/admin", "Dashboard"),
    ("/admin/houses", "Houses"),
    ("/admin/tours", "Tours"),
    ("/admin/bookings", "Bookings"),
    ("/admin/categories", "Categories"),
    ("/admin/faqs", "FAQs"),
    ("/admin/users", "Users"),
    ("/admin/settings", "Settings"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_authenticated = move || auth.get().is_authenticated;
    let is_admin = move || auth.get().is_admin();
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let site_name = config::current().site_name;

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">{site_name}</a>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-2">
                            {PUBLIC_NAV
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK>{*label}</a> })
                                .collect_view()}
                            <Show when=is_authenticated>
                                <a href="/my-bookings" class=NAV_LINK>"My bookings"</a>
                            </Show>
                            <Show when=is_admin>
                                <a href="/admin" class=NAV_LINK>"Admin"</a>
                            </Show>
                            <Show
                                when=is_authenticated
                                fallback=move || view! {
                                    <a href="/login" class=NAV_LINK>"Sign in"</a>
                                    <a
                                        href="/register"
                                        class="ml-2 rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                                    >
                                        "Register"
                                    </a>
                                }
                            >
                                <span class="px-3 text-sm text-fg-muted">{user_name}</span>
                                <button
                                    on:click=on_logout
                                    class=format!("{} disabled:opacity-50", NAV_LINK)
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {PUBLIC_NAV
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class=MOBILE_NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                            <Show when=is_authenticated>
                                <a href="/my-bookings" class=MOBILE_NAV_LINK>"My bookings"</a>
                            </Show>
                            <Show when=is_admin>
                                <a href="/admin" class=MOBILE_NAV_LINK>"Admin"</a>
                            </Show>
                            <Show
                                when=is_authenticated
                                fallback=move || view! {
                                    <a href="/login" class=MOBILE_NAV_LINK>"Sign in"</a>
                                    <a href="/register" class=MOBILE_NAV_LINK>"Register"</a>
                                }
                            >
                                <button
                                    on:click=on_logout
                                    class=format!("w-full text-left {} disabled:opacity-50", MOBILE_NAV_LINK)
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site_name = config::current().site_name;
    let year = chrono::Datelike::year(&crate::utils::time::today());
    view! {
        <footer class="border-t border-border bg-surface-elevated mt-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col sm:flex-row justify-between gap-2 text-sm text-fg-muted">
                <p>{format!("© {} {}", year, site_name)}</p>
                <nav class="flex gap-4">
                    <a href="/houses" class="hover:text-fg">"Houses"</a>
                    <a href="/tours" class="hover:text-fg">"Tours"</a>
                    <a href="/faq" class="hover:text-fg">"FAQ"</a>
                </nav>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header/>
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
            <ToastHost/>
        </div>
    }
}

/// Back-office shell: the public header plus a sidebar of admin sections.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let current = crate::utils::navigation::current_path().unwrap_or_default();
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header/>
            <div class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 flex flex-col lg:flex-row gap-6">
                <aside class="lg:w-56 shrink-0">
                    <nav class="bg-surface-elevated rounded-lg shadow p-2 space-y-1">
                        {ADMIN_NAV
                            .iter()
                            .map(|(href, label)| {
                                let active = is_active_admin_link(&current, href);
                                view! {
                                    <a
                                        href=*href
                                        class=if active {
                                            "block px-3 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "block px-3 py-2 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                        }
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </aside>
                <main class="flex-1 min-w-0">{children()}</main>
            </div>
            <ToastHost/>
        </div>
    }
}

fn is_active_admin_link(current: &str, href: &str) -> bool {
    if href == "/admin" {
        current == "/admin" || current == "/admin/"
    } else {
        current == href || current.starts_with(&format!("{}/", href))
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_admin_link_for_admins() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/admin\""));
        assert!(html.contains("Sign out"));
        assert!(html.contains("Site Admin"));
    }

    #[test]
    fn header_hides_admin_link_for_regular_users() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Header /> }
        });
        assert!(!html.contains("href=\"/admin\""));
        assert!(html.contains("My bookings"));
    }

    #[test]
    fn header_offers_sign_in_when_anonymous() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <Header /> }
        });
        assert!(html.contains("Sign in"));
        assert!(html.contains("Register"));
        assert!(!html.contains("My bookings"));
    }

    #[test]
    fn layouts_render_children() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("<footer"));

        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminLayout><div>"admin-child"</div></AdminLayout> }
        });
        assert!(html.contains("admin-child"));
        assert!(html.contains("/admin/categories"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
