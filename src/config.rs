//! Runtime configuration read from the environment.

use std::env::{self, VarError};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the keystroke debounce delay in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "PWD_POLICY_DEBOUNCE_MS";

/// Debounce delay used when `PWD_POLICY_DEBOUNCE_MS` is not set.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_POLICY_DEBOUNCE_MS value: {0:?}")]
    InvalidDebounce(String),
}

/// Returns the debounce delay for keystroke evaluation.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_DEBOUNCE_MS`
/// 2. `DEFAULT_DEBOUNCE` (300 ms)
///
/// # Errors
///
/// Returns `ConfigError::InvalidDebounce` if the variable is set but is not
/// a non-negative integer.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_POLICY_DEBOUNCE_MS", "150"); }
/// let delay = pwd_policy::debounce_from_env()?;
/// ```
pub fn debounce_from_env() -> Result<Duration, ConfigError> {
    match env::var(DEBOUNCE_ENV_VAR) {
        Ok(raw) => {
            let delay = raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDebounce(raw.clone()))?;

            #[cfg(feature = "tracing")]
            tracing::info!("Debounce delay set from environment: {:?}", delay);

            Ok(delay)
        }
        Err(VarError::NotPresent) => Ok(DEFAULT_DEBOUNCE),
        Err(VarError::NotUnicode(raw)) => {
            #[cfg(feature = "tracing")]
            tracing::error!("{} is not valid unicode", DEBOUNCE_ENV_VAR);
            Err(ConfigError::InvalidDebounce(raw.to_string_lossy().into_owned()))
        }
    }
}
