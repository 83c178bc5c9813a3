//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, the unit browser form fields
/// report, so a character outside the BMP counts twice.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().encode_utf16().count() < MIN_LENGTH {
        return Some("Password should be at least 8 characters long");
    }
    None
}
