use email_address::EmailAddress;

use crate::error::{Result, StorageError};

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Checks signup input before anything touches the database.
pub(crate) fn check_signup(username: &str, email: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(StorageError::validation("username", "must not be empty"));
    }
    if email.trim().is_empty() {
        return Err(StorageError::validation("email", "must not be empty"));
    }
    if !is_valid_email(email) {
        return Err(StorageError::validation(
            "email",
            format!("'{email}' is not a valid email address"),
        ));
    }
    if password.is_empty() {
        return Err(StorageError::validation("password", "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("u1@email.com"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("@email.com"));
    }

    #[test]
    fn signup_requires_every_field() {
        assert!(check_signup("u1", "u1@email.com", "password").is_ok());

        let err = check_signup("  ", "u1@email.com", "password").unwrap_err();
        assert!(matches!(err, StorageError::Validation { field: "username", .. }));

        let err = check_signup("u1", "bad-email", "password").unwrap_err();
        assert!(matches!(err, StorageError::Validation { field: "email", .. }));

        let err = check_signup("u1", "u1@email.com", "").unwrap_err();
        assert!(matches!(err, StorageError::Validation { field: "password", .. }));
    }
}
