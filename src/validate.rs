//! Credential checks applied before login and registration requests

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=20;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Length as the web form measures it, in UTF-16 code units
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_password(password: &str) -> bool {
    form_len(password) >= MIN_PASSWORD_LEN
}

pub fn validate_username(username: &str) -> bool {
    USERNAME_LEN.contains(&form_len(username))
}

/// Check login input, naming the first offending field
pub fn check_credentials(username: &str, password: &str) -> Result<()> {
    if !validate_username(username) {
        return Err(Error::Validation(format!(
            "username must be {} to {} characters",
            USERNAME_LEN.start(),
            USERNAME_LEN.end()
        )));
    }
    if !validate_password(password) {
        return Err(Error::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Check registration input, naming the first offending field
pub fn check_registration(username: &str, email: &str, password: &str) -> Result<()> {
    check_credentials(username, password)?;
    if !validate_email(email) {
        return Err(Error::Validation(format!("'{}' is not a valid email", email)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com"));
        assert!(validate_email("a.b+c@mail.example.org"));
        assert!(!validate_email("ana@example"));
        assert!(!validate_email("ana example@x.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret"));
        assert!(!validate_password("short"));
    }

    #[test]
    fn test_validate_username_bounds() {
        assert!(!validate_username("ab"));
        assert!(validate_username("abc"));
        assert!(validate_username(&"x".repeat(20)));
        assert!(!validate_username(&"x".repeat(21)));
        // Counted in UTF-16 units, not bytes
        assert!(validate_username("小明明"));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // One emoji is a surrogate pair
        assert!(validate_username("😀a"));
        assert!(!validate_username(&"😀".repeat(11)));
        assert!(validate_password("😀😀😀"));
        assert!(!validate_password("😀😀"));
    }

    #[test]
    fn test_check_registration_reports_field() {
        let err = check_registration("ana", "not-an-email", "secret1").unwrap_err();
        assert!(err.to_string().contains("valid email"));

        let err = check_registration("an", "ana@example.com", "secret1").unwrap_err();
        assert!(err.to_string().contains("username"));

        assert!(check_registration("ana", "ana@example.com", "secret1").is_ok());
    }
}
