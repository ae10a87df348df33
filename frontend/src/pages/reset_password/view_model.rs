use super::repository::ResetPasswordRepository;
use crate::{
    api::{ApiClient, ApiError, MessageResponse, ResetPasswordRequest},
    utils::validation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub link_valid: Signal<bool>,
    pub submit_action: Action<(String, String), Result<MessageResponse, ApiError>>,
}

/// `email` and `token` come from the link in the reset email.
pub fn use_reset_password_view_model(
    email: Signal<String>,
    token: Signal<String>,
) -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));

    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);
    let link_valid =
        Signal::derive(move || !email.get().trim().is_empty() && !token.get().trim().is_empty());

    let submit_action = create_action(move |(new_password, confirmation): &(String, String)| {
        let repo = repository.clone();
        let email = email.get_untracked();
        let token = token.get_untracked();
        let new_password = new_password.clone();
        let confirmation = confirmation.clone();
        async move {
            let request = validate_reset_input(&email, &token, &new_password, &confirmation)?;
            repo.reset_password(request).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    let message = if resp.message.trim().is_empty() {
                        "Your password has been reset.".to_string()
                    } else {
                        resp.message
                    };
                    success.set(Some(message));
                    error.set(None);
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    error.set(Some(err));
                    success.set(None);
                }
            }
        }
    });

    ResetPasswordViewModel {
        password,
        confirm,
        error,
        success,
        link_valid,
        submit_action,
    }
}

pub fn validate_reset_input(
    email: &str,
    token: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<ResetPasswordRequest, ApiError> {
    let email = email.trim();
    let token = token.trim();
    if email.is_empty() || token.is_empty() {
        return Err(ApiError::validation("This reset link is invalid or incomplete."));
    }
    let problems = validation::password_problems(new_password);
    if let Some(first) = problems.first() {
        return Err(ApiError {
            details: Some(serde_json::json!({ "errors": problems })),
            ..ApiError::validation(*first)
        });
    }
    if new_password != confirmation {
        return Err(ApiError::validation("Passwords do not match."));
    }
    Ok(ResetPasswordRequest {
        email: email.to_string(),
        token: token.to_string(),
        new_password: new_password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_incomplete_link() {
        let err = validate_reset_input("", "token", "Secret123", "Secret123").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(validate_reset_input("a@b.co", " ", "Secret123", "Secret123").is_err());
    }

    #[test]
    fn rejects_weak_or_mismatched_passwords() {
        let err = validate_reset_input("a@b.co", "token", "weak", "weak").unwrap_err();
        assert!(err.details.is_some());
        let err = validate_reset_input("a@b.co", "token", "Secret123", "Secret124").unwrap_err();
        assert_eq!(err.error, "Passwords do not match.");
    }

    #[test]
    fn builds_request_with_trimmed_link_values() {
        let request = validate_reset_input(" a@b.co ", " token ", "Secret123", "Secret123").unwrap();
        assert_eq!(request.email, "a@b.co");
        assert_eq!(request.token, "token");
        assert_eq!(request.new_password, "Secret123");
    }
}
