use crate::{api::ApiError, utils::validation};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email address."));
    }
    if !validation::is_valid_email(email) {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password."));
    }
    Ok(())
}

/// A bare 401 from the login endpoint means bad credentials, not an
/// expired session.
pub fn login_error(error: ApiError) -> ApiError {
    if error.is_unauthorized() && error.error == ApiError::unauthorized().error {
        ApiError {
            error: "Invalid email or password.".into(),
            ..error
        }
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_required_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert_eq!(
            validate_credentials("not-an-email", "secret").unwrap_err().error,
            "Please enter a valid email address."
        );
        assert!(validate_credentials("guest@example.com", "").is_err());
        assert!(validate_credentials("guest@example.com", "secret").is_ok());
    }

    #[test]
    fn bare_unauthorized_becomes_credentials_message() {
        assert_eq!(
            login_error(ApiError::unauthorized()).error,
            "Invalid email or password."
        );
        let from_body = ApiError::from_response(401, r#"{"message":"Email is not confirmed."}"#);
        assert_eq!(login_error(from_body).error, "Email is not confirmed.");
        assert_eq!(login_error(ApiError::timeout()).code, "TIMEOUT");
    }
}
