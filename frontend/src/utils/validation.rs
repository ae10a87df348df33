pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose shape check; the API does the real validation.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Mirrors the API's identity password rules so the form can fail fast.
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        problems.push("Password must be at least 8 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("Password must contain a digit.");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        problems.push("Password must contain an uppercase letter.");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        problems.push("Password must contain a lowercase letter.");
    }
    problems
}

pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email(" guest@mail.example.az "));
        assert!(!is_valid_email("guest@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@@example.com"));
        assert!(!is_valid_email("gu est@example.com"));
        assert!(!is_valid_email("guest@example."));
    }

    #[test]
    fn password_rules() {
        assert!(password_problems("Secret123").is_empty());
        assert_eq!(password_problems("short1A").len(), 1);
        assert_eq!(password_problems("alllowercase").len(), 2);
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" +994 "), Some("+994".to_string()));
    }
}
