use super::view_model::{use_reset_password_view_model, ResetPasswordViewModel};
use crate::components::{
    auth_card::{AuthCard, AuthSuccess},
    error::InlineErrorMessage,
    forms::TextField,
    layout::{ErrorMessage, Layout},
};
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let query = use_query_map();
    let email = Signal::derive(move || query.with(|q| q.get("email").cloned().unwrap_or_default()));
    let token = Signal::derive(move || query.with(|q| q.get("token").cloned().unwrap_or_default()));
    let vm = use_reset_password_view_model(email, token);
    view! {
        <Layout>
            <ResetPasswordForm vm=vm />
        </Layout>
    }
}

#[component]
pub fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let password = vm.password;
    let confirm = vm.confirm;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <AuthCard title="Set a new password">
            {move || {
                if let Some(message) = vm.success.get() {
                    return view! { <AuthSuccess message=message /> }.into_view();
                }
                if !vm.link_valid.get() {
                    return view! {
                        <div class="space-y-3">
                            <ErrorMessage message="This reset link is invalid or incomplete." />
                            <a href="/forgot-password" class="text-sm text-link hover:text-link-hover">"Request a new link"</a>
                        </div>
                    }
                    .into_view();
                }
                view! {
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_action.dispatch((password.get(), confirm.get()));
                        }
                    >
                        <TextField label="New password" value=password id="new-password" input_type="password" autocomplete="new-password" required=true />
                        <TextField label="Confirm password" value=confirm id="confirm-password" input_type="password" autocomplete="new-password" required=true />
                        <InlineErrorMessage error=vm.error />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Saving..." } else { "Reset password" }}
                        </button>
                    </form>
                }
                .into_view()
            }}
        </AuthCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn missing_token_shows_invalid_link() {
        let html = render_to_string(|| {
            let vm = use_reset_password_view_model(
                Signal::derive(|| "guest@example.com".to_string()),
                Signal::derive(String::new),
            );
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("This reset link is invalid or incomplete."));
        assert!(!html.contains("Confirm password"));
    }

    #[test]
    fn complete_link_shows_form() {
        let html = render_to_string(|| {
            let vm = use_reset_password_view_model(
                Signal::derive(|| "guest@example.com".to_string()),
                Signal::derive(|| "abc".to_string()),
            );
            view! { <ResetPasswordForm vm=vm /> }
        });
        assert!(html.contains("Confirm password"));
    }
}
