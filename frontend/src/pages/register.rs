use crate::{
    api::{ApiClient, ApiError, MessageResponse, RegisterRequest},
    components::{
        auth_card::{AuthCard, AuthSuccess},
        error::InlineErrorMessage,
        forms::TextField,
        layout::Layout,
    },
    utils::validation,
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        let full_name = validation::non_blank(&self.full_name)
            .ok_or_else(|| ApiError::validation("Please enter your full name."))?;
        if !validation::is_valid_email(&self.email) {
            return Err(ApiError::validation("Please enter a valid email address."));
        }
        let problems = validation::password_problems(&self.password);
        if let Some(first) = problems.first() {
            return Err(ApiError {
                details: Some(serde_json::json!({ "errors": problems })),
                ..ApiError::validation(*first)
            });
        }
        if self.password != self.confirm {
            return Err(ApiError::validation("Passwords do not match."));
        }
        Ok(RegisterRequest {
            full_name,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: validation::non_blank(&self.phone),
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Layout>
            <RegisterForm />
        </Layout>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |form: &RegisterFormState| {
        let api = api.clone();
        let form = form.clone();
        async move {
            let request = form.to_request()?;
            api.register(&request).await
        }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(MessageResponse { message }) => {
                    log::info!("account registered");
                    error.set(None);
                    success.set(Some(if message.trim().is_empty() {
                        "Account created. Check your inbox to confirm your email address.".to_string()
                    } else {
                        message
                    }));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        register_action.dispatch(RegisterFormState {
            full_name: full_name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            confirm: confirm.get(),
        });
    };

    view! {
        <AuthCard title="Create an account" subtitle="Book faster and keep track of your stays.">
            {move || match success.get() {
                Some(message) => view! { <AuthSuccess message=message /> }.into_view(),
                None => view! {
                    <form class="space-y-4" on:submit=on_submit>
                        <TextField label="Full name" value=full_name id="register-name" autocomplete="name" required=true />
                        <TextField label="Email" value=email id="register-email" input_type="email" autocomplete="email" required=true />
                        <TextField label="Phone" value=phone id="register-phone" input_type="tel" autocomplete="tel" />
                        <TextField label="Password" value=password id="register-password" input_type="password" autocomplete="new-password" required=true />
                        <TextField label="Confirm password" value=confirm id="register-confirm" input_type="password" autocomplete="new-password" required=true />
                        <InlineErrorMessage error=error />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Creating account..." } else { "Create account" }}
                        </button>
                        <p class="text-sm text-center text-fg-muted">
                            "Already registered? "
                            <a href="/login" class="font-medium text-link hover:text-link-hover">"Sign in"</a>
                        </p>
                    </form>
                }
                .into_view(),
            }}
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterFormState {
        RegisterFormState {
            full_name: " Ayla Guest ".into(),
            email: "ayla@example.com ".into(),
            phone: " ".into(),
            password: "Secret123".into(),
            confirm: "Secret123".into(),
        }
    }

    #[test]
    fn builds_register_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.full_name, "Ayla Guest");
        assert_eq!(request.email, "ayla@example.com");
        assert!(request.phone.is_none());
    }

    #[test]
    fn reports_first_problem() {
        let form = RegisterFormState { full_name: String::new(), ..filled() };
        assert_eq!(form.to_request().unwrap_err().error, "Please enter your full name.");

        let form = RegisterFormState { password: "short".into(), confirm: "short".into(), ..filled() };
        let err = form.to_request().unwrap_err();
        assert_eq!(err.error, "Password must be at least 8 characters.");
        assert_eq!(
            err.details.unwrap()["errors"].as_array().map(Vec::len),
            Some(3)
        );

        let form = RegisterFormState { confirm: "Secret124".into(), ..filled() };
        assert_eq!(form.to_request().unwrap_err().error, "Passwords do not match.");
    }
}
