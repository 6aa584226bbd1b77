#![allow(dead_code)]

//! Form validation — the only real error paths in the system.
//! Rules match the original sign-in form: required fields, an email shape
//! check, a minimum password length on registration, and a confirmation
//! match.

use std::fmt;

use crate::auth::models::RegistrationForm;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A single field-keyed validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

/// Checks the `\S+@\S+\.\S+` email shape: something before the `@`,
/// a domain with a dot, and no whitespace anywhere.
pub fn email_shape_ok(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates login input. An empty result means the form is acceptable.
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(field_error("email", "Email is required"));
    } else if !email_shape_ok(email) {
        errors.push(field_error("email", "Email is invalid"));
    }

    if password.is_empty() {
        errors.push(field_error("password", "Password is required"));
    }

    errors
}

/// Validates a registration form. Registration additionally enforces the
/// minimum password length and the confirmation match.
pub fn validate_registration(form: &RegistrationForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.full_name.trim().is_empty() {
        errors.push(field_error("full_name", "Full name is required"));
    }

    if form.email.is_empty() {
        errors.push(field_error("email", "Email is required"));
    } else if !email_shape_ok(&form.email) {
        errors.push(field_error("email", "Email is invalid"));
    }

    if form.password.is_empty() {
        errors.push(field_error("password", "Password is required"));
    } else if form.password.len() < MIN_PASSWORD_LEN {
        errors.push(field_error(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    if form.password != form.confirm_password {
        errors.push(field_error("confirm_password", "Passwords do not match"));
    }

    errors
}

/// Joins field errors into one human-readable message.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;

    fn make_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Demo User".to_string(),
            email: "demo@hirehelp.dev".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: Role::Applicant,
        }
    }

    #[test]
    fn test_email_shape_accepts_plain_addresses() {
        assert!(email_shape_ok("a@b.c"));
        assert!(email_shape_ok("sarah.j@email.com"));
    }

    #[test]
    fn test_email_shape_rejects_malformed_addresses() {
        assert!(!email_shape_ok(""));
        assert!(!email_shape_ok("no-at-sign.com"));
        assert!(!email_shape_ok("@missing-local.com"));
        assert!(!email_shape_ok("no-dot@domain"));
        assert!(!email_shape_ok("spaced out@mail.com"));
        assert!(!email_shape_ok("double@@mail.com"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login("", "");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_login_accepts_any_pattern_valid_credentials() {
        assert!(validate_login("anyone@anywhere.io", "x").is_empty());
    }

    #[test]
    fn test_registration_enforces_password_length() {
        let mut form = make_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();

        let errors = validate_registration(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_registration_enforces_confirmation_match() {
        let mut form = make_form();
        form.confirm_password = "different1".to_string();

        let errors = validate_registration(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirm_password");
    }

    #[test]
    fn test_registration_requires_full_name() {
        let mut form = make_form();
        form.full_name = "   ".to_string();

        let errors = validate_registration(&form);
        assert_eq!(errors[0].field, "full_name");
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        assert!(validate_registration(&make_form()).is_empty());
    }

    #[test]
    fn test_summarize_joins_messages() {
        let errors = validate_login("", "");
        let summary = summarize(&errors);
        assert!(summary.contains("Email is required"));
        assert!(summary.contains("Password is required"));
    }
}
