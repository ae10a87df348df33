use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(String),
}

/// Where a visitor ends up for a page that needs a session.
pub fn auth_decision(state: &AuthState, current_path: Option<&str>) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.is_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(navigation::login_path_with_redirect(current_path))
    }
}

/// Same as `auth_decision`, but signed-in visitors without the admin role
/// are sent home.
pub fn admin_decision(state: &AuthState, current_path: Option<&str>) -> GuardDecision {
    match auth_decision(state, current_path) {
        GuardDecision::Render if !state.is_admin() => GuardDecision::Redirect("/".into()),
        other => other,
    }
}

fn guarded_view(
    decide: fn(&AuthState, Option<&str>) -> GuardDecision,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| {
        decide(&auth.get(), navigation::current_path().as_deref())
    });
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigation::redirect(&target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
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

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded_view(auth_decision, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded_view(admin_decision, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
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
            provide_auth(None);
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
            let (auth, set_auth) = create_signal(AuthState {
                user: None,
                is_authenticated: false,
                loading: true,
            });
            provide_context((auth, set_auth));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_admin_checks_role() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));

        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
