use super::utils::{login_error, LoginFormState};
use crate::{
    api::{ApiError, LoginRequest},
    state::{auth, toast::use_toasts},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<auth::CurrentUser, ApiError>>,
}

/// `redirect_to` is where a successful sign-in lands.
pub fn use_login_view_model(redirect_to: Signal<String>) -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let toasts = use_toasts();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    form.password.set(String::new());
                    toasts.push_success(format!("Welcome back, {}!", user.display_name()));
                    navigation::redirect(&redirect_to.get_untracked());
                }
                Err(err) => error.set(Some(login_error(err))),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model(Signal::derive(|| "/".to_string()));
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
            assert!(!vm.login_action.pending().get());
        });
    }
}
