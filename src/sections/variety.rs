//! Character variety sections - digits, lowercase, uppercase, special chars.
//!
//! Classes are ASCII only: anything outside `A-Za-z0-9` is special.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn contains(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// Checks for at least one digit in `0-9`.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if contains(password, |c| c.is_ascii_digit()) {
        return None;
    }
    Some("Add numbers")
}

/// Checks for at least one lowercase letter in `a-z`.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if contains(password, |c| c.is_ascii_lowercase()) {
        return None;
    }
    Some("Add lowercase letters")
}

/// Checks for at least one uppercase letter in `A-Z`.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if contains(password, |c| c.is_ascii_uppercase()) {
        return None;
    }
    Some("Add uppercase letters")
}

/// Checks for at least one character outside `A-Za-z0-9`.
pub fn special_section(password: &SecretString) -> SectionResult {
    if contains(password, |c| !c.is_ascii_alphanumeric()) {
        return None;
    }
    Some("Add special characters")
}
