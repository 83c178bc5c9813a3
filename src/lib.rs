//! Password composition policy library
//!
//! This library scores a candidate password against five composition
//! rules and maps the result to a strength meter for form feedback.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced keystroke feed with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_DEBOUNCE_MS`: Keystroke debounce delay in milliseconds
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password_policy, StrengthMeter, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluate_password_policy(&password);
//! assert_eq!(assessment.score(), 5);
//!
//! let meter = StrengthMeter::from_assessment(&assessment);
//! assert_eq!(meter.tier(), StrengthTier::High);
//! assert_eq!(meter.feedback(), "Strong password");
//! ```

// Internal modules
mod assessment;
mod config;
mod evaluator;
mod meter;
mod sections;

// Public API
pub use assessment::{PasswordAssessment, RULE_COUNT};
pub use config::{ConfigError, DEBOUNCE_ENV_VAR, DEFAULT_DEBOUNCE, debounce_from_env};
pub use evaluator::evaluate_password_policy;
pub use meter::{StrengthMeter, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_policy_tx, run_policy_feed};
