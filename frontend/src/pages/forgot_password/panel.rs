use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::components::{
    auth_card::{AuthCard, AuthSuccess},
    error::InlineErrorMessage,
    forms::TextField,
    layout::Layout,
};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    view! {
        <Layout>
            <ForgotPasswordForm vm=vm />
        </Layout>
    }
}

#[component]
pub fn ForgotPasswordForm(vm: ForgotPasswordViewModel) -> impl IntoView {
    let email = vm.email;
    let error = vm.error;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <AuthCard
            title="Reset your password"
            subtitle="Enter your email address and we'll send you a link to reset your password."
        >
            {move || match success.get() {
                Some(message) => view! { <AuthSuccess message=message link_label="Back to sign in" /> }.into_view(),
                None => view! {
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_action.dispatch(email.get());
                        }
                    >
                        <TextField
                            label="Email address"
                            value=email
                            id="email-address"
                            input_type="email"
                            autocomplete="email"
                            required=true
                        />
                        <InlineErrorMessage error=error />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                        <div class="text-sm text-center">
                            <a href="/login" class="font-medium text-link hover:text-link-hover">"Back to sign in"</a>
                        </div>
                    </form>
                }
                .into_view(),
            }}
        </AuthCard>
    }
}
