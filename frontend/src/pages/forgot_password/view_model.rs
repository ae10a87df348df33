use super::repository::ForgotPasswordRepository;
use crate::{
    api::{ApiClient, ApiError, MessageResponse},
    utils::validation,
};
use leptos::*;
use std::rc::Rc;

pub const DEFAULT_SUCCESS: &str = "If an account exists for that address, a reset link is on its way.";

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<String, Result<MessageResponse, ApiError>>,
}

pub fn validate_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required."));
    }
    if !validation::is_valid_email(email) {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    Ok(email.to_string())
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let input = value.clone();
        async move {
            let email = validate_email(&input)?;
            repo.request_reset(email).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    let message = if resp.message.trim().is_empty() {
                        DEFAULT_SUCCESS.to_string()
                    } else {
                        resp.message
                    };
                    success.set(Some(message));
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err));
                    success.set(None);
                }
            }
        }
    });

    ForgotPasswordViewModel {
        email,
        error,
        success,
        submit_action,
    }
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn email_is_trimmed_and_checked() {
        assert_eq!(validate_email("  guest@example.com ").unwrap(), "guest@example.com");
        assert_eq!(validate_email(" ").unwrap_err().error, "Email is required.");
        assert!(validate_email("guest").is_err());
    }
}
