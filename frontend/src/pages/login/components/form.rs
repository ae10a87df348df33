use crate::{
    api::ApiError, components::error::InlineErrorMessage, pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

const INPUT: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href="/register" class="font-medium text-link hover:text-link-hover">"Register"</a>
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">"Email address"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class=format!("{} rounded-t-md", INPUT)
                                placeholder="Email address"
                                prop:value=form.email
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class=format!("{} rounded-b-md", INPUT)
                                placeholder="Password"
                                prop:value=form.password
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="flex justify-end text-sm">
                        <a href="/forgot-password" class="font-medium text-link hover:text-link-hover">
                            "Forgot your password?"
                        </a>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_shows_error_and_links() {
        let html = render_to_string(|| {
            let form = LoginFormState::default();
            let error = create_rw_signal(Some(ApiError::unknown("Invalid email or password.")));
            view! {
                <LoginForm
                    form=form
                    error=error
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Invalid email or password."));
        assert!(html.contains("/forgot-password"));
        assert!(html.contains("/register"));
    }
}
