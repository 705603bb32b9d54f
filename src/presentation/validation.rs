use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::domain::error::DomainError;
use crate::presentation::dto::CreateUserRequest;

static LETTER_MATCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\-]+$").unwrap());

/// Checks a creation payload before any entity is constructed. Returns a
/// structured error; the HTTP status mapping lives at the response boundary.
pub fn validate_create_user(body: &CreateUserRequest) -> Result<(), DomainError> {
    if !LETTER_MATCH_PATTERN.is_match(&body.name) {
        return Err(DomainError::Validation {
            field: "name",
            message: "Name should contains only letters".into(),
        });
    }
    if !LETTER_MATCH_PATTERN.is_match(&body.surname) {
        return Err(DomainError::Validation {
            field: "surname",
            message: "Surname should contains only letters".into(),
        });
    }
    if !body.email.validate_email() {
        return Err(DomainError::Validation {
            field: "email",
            message: "value is not a valid email address".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, surname: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    #[test]
    fn accepts_letters_and_hyphens() {
        assert!(validate_create_user(&body("Jane", "Doe", "jane@example.com")).is_ok());
        assert!(validate_create_user(&body("Mary-Ann", "Smith-Jones", "ma@example.com")).is_ok());
    }

    #[test]
    fn rejects_digits_in_name() {
        let err = validate_create_user(&body("J4ne", "Doe", "jane@example.com")).unwrap_err();
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "name");
                assert_eq!(message, "Name should contains only letters");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_spaces_and_symbols_in_surname() {
        for surname in ["Do e", "Doe!", "Doe_", "дое"] {
            let err = validate_create_user(&body("Jane", surname, "jane@example.com")).unwrap_err();
            match err {
                DomainError::Validation { field, message } => {
                    assert_eq!(field, "surname");
                    assert_eq!(message, "Surname should contains only letters");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(validate_create_user(&body("", "Doe", "jane@example.com")).is_err());
        assert!(validate_create_user(&body("Jane", "", "jane@example.com")).is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "jane@", "@example.com", ""] {
            let err = validate_create_user(&body("Jane", "Doe", email)).unwrap_err();
            match err {
                DomainError::Validation { field, .. } => assert_eq!(field, "email"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
