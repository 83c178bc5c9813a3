//! Password policy sections
//!
//! Each section checks one composition rule. The evaluator runs them in a
//! fixed order: length, digit, lowercase, uppercase, special.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section check functions.
/// - `Some(reason)` - Rule not met, with the feedback message
/// - `None` - Rule met
pub type SectionResult = Option<&'static str>;
