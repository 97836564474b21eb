//! Field rules for user writes.
//!
//! Every rule runs on every call; failures are collected rather than
//! short-circuited so the client sees the whole list at once.

use crate::error::ValidationFieldError;
use crate::models::User;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";

/// Checks a candidate user and returns every violated rule.
///
/// An empty vector means the user may be persisted. Errors are ordered
/// name, email, password.
pub fn validate_user(user: &User) -> Vec<ValidationFieldError> {
    let mut errors = Vec::new();

    if is_blank(&user.name) {
        errors.push(ValidationFieldError::new("name", NAME_REQUIRED));
    }

    if is_blank(&user.email) {
        errors.push(ValidationFieldError::new("email", EMAIL_REQUIRED));
    } else if !is_email_shaped(&user.email) {
        errors.push(ValidationFieldError::new("email", EMAIL_INVALID));
    }

    if is_blank(&user.password) {
        errors.push(ValidationFieldError::new("password", PASSWORD_REQUIRED));
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Exactly one `@`, neither first nor last. Nothing else about the address
/// is checked, so non-ASCII and spaces pass.
fn is_email_shaped(value: &str) -> bool {
    match value.find('@') {
        Some(at) => at > 0 && at + 1 < value.len() && value[at + 1..].find('@').is_none(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn user(name: &str, email: &str, password: &str) -> User {
        User {
            id: Uuid::nil(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_user_has_no_errors() {
        assert!(validate_user(&user("Ana", "ana@example.com", "secret")).is_empty());
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_user(&user("", "ana@example.com", "secret"));
        assert_eq!(errors, vec![ValidationFieldError::new("name", NAME_REQUIRED)]);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_user(&user("   ", "ana@example.com", "\t"));
        assert_eq!(
            errors,
            vec![
                ValidationFieldError::new("name", NAME_REQUIRED),
                ValidationFieldError::new("password", PASSWORD_REQUIRED),
            ]
        );
    }

    #[test]
    fn test_empty_email_skips_format_check() {
        let errors = validate_user(&user("Ana", "", "secret"));
        assert_eq!(errors, vec![ValidationFieldError::new("email", EMAIL_REQUIRED)]);
    }

    #[test]
    fn test_malformed_email() {
        for email in ["ana", "ana@", "@example.com", "ana@@example.com", "a@b@c", "@"] {
            let errors = validate_user(&user("Ana", email, "secret"));
            assert_eq!(
                errors,
                vec![ValidationFieldError::new("email", EMAIL_INVALID)],
                "email {:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_loose_email_shapes_accepted() {
        for email in [
            "José@exemplo.com.br",
            "ana souza@example.com",
            "ana@example.com ",
            "ana@localhost",
            "a@b",
        ] {
            assert!(
                validate_user(&user("Ana", email, "secret")).is_empty(),
                "email {:?} should be accepted",
                email
            );
        }
    }

    #[test]
    fn test_all_rules_collected() {
        let errors = validate_user(&user("", "", ""));
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec![NAME_REQUIRED, EMAIL_REQUIRED, PASSWORD_REQUIRED]);
    }

    proptest! {
        #[test]
        fn prop_well_formed_users_pass(
            name in "[A-Za-z][A-Za-z ]{0,30}",
            local in "[a-z][a-z0-9.]{0,15}[a-z0-9]",
            domain in "[a-z]{2,12}",
            password in "[!-~]{1,40}",
        ) {
            let email = format!("{}@{}.com", local, domain);
            prop_assert!(validate_user(&user(&name, &email, &password)).is_empty());
        }

        #[test]
        fn prop_single_inner_at_is_accepted(
            local in "[^@]{1,20}",
            domain in "[^@]{1,20}",
        ) {
            prop_assume!(!local.trim().is_empty());
            let email = format!("{}@{}", local, domain);
            prop_assert!(validate_user(&user("Ana", &email, "pw")).is_empty());
        }

        #[test]
        fn prop_blank_password_always_reported(
            name in "[A-Za-z]{1,10}",
            blank in "[ \t]{0,5}",
        ) {
            let errors = validate_user(&user(&name, "ana@example.com", &blank));
            prop_assert_eq!(errors, vec![ValidationFieldError::new("password", PASSWORD_REQUIRED)]);
        }
    }
}
