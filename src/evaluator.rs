//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::assessment::{PasswordAssessment, RULE_COUNT};
use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_section,
    uppercase_section,
};

type Section = fn(&SecretString) -> SectionResult;

// Order here is the order feedback is reported in.
const SECTIONS: [(&str, Section); RULE_COUNT as usize] = [
    ("length", length_section),
    ("digit", digit_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("special", special_section),
];

/// Evaluates a password against the composition policy.
///
/// Every rule is checked, none short-circuits. Each passing rule adds one
/// point to the score and each failing rule adds its feedback message.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordAssessment` containing the score and the unmet rules.
pub fn evaluate_password_policy(password: &SecretString) -> PasswordAssessment {
    let mut score = 0;
    let mut unmet_rules = Vec::with_capacity(SECTIONS.len());

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("policy section failed: {}", _section_name);
                unmet_rules.push(reason);
            }
            None => score += 1,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, unmet = unmet_rules.len(), "password policy evaluated");

    PasswordAssessment::new(score, unmet_rules)
}

/// Waits `delay`, evaluates the password and sends the assessment on `tx`.
///
/// Nothing is sent if `token` is cancelled before the delay elapses or
/// while the send is waiting for channel capacity.
#[cfg(feature = "async")]
pub async fn evaluate_password_policy_tx(
    password: &SecretString,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation scheduled in {:?}", delay);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let assessment = evaluate_password_policy(password);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled while sending");
        }
        sent = tx.send(assessment) => {
            if let Err(_e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password assessment: {}", _e);
            }
        }
    }
}

/// Drives a strength meter from a stream of input changes.
///
/// Each new input replaces the pending one and restarts the `delay` timer,
/// so only settled input is evaluated. When `inputs` closes, any pending
/// input is evaluated right away. Returns on cancellation, when `inputs`
/// closes, or when `outputs` has no receiver left. Cancellation also ends a
/// send that is waiting on a full `outputs` channel.
#[cfg(feature = "async")]
pub async fn run_policy_feed(
    mut inputs: mpsc::Receiver<SecretString>,
    outputs: mpsc::Sender<PasswordAssessment>,
    delay: Duration,
    token: CancellationToken,
) {
    let mut pending: Option<SecretString> = None;

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("policy feed cancelled");
                break;
            }
            next = inputs.recv() => match next {
                Some(password) => pending = Some(password),
                None => {
                    if let Some(password) = pending.take() {
                        deliver(&outputs, &password, &token).await;
                    }
                    break;
                }
            },
            _ = tokio::time::sleep(delay), if pending.is_some() => {
                if let Some(password) = pending.take() {
                    if !deliver(&outputs, &password, &token).await {
                        break;
                    }
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("policy feed stopped");
}

/// Sends one assessment. Returns `false` if the feed should stop.
#[cfg(feature = "async")]
async fn deliver(
    outputs: &mpsc::Sender<PasswordAssessment>,
    password: &SecretString,
    token: &CancellationToken,
) -> bool {
    let assessment = evaluate_password_policy(password);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("policy feed cancelled while sending");
            false
        }
        sent = outputs.send(assessment) => match sent {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("policy feed receiver dropped: {}", _e);
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pwd: &str) -> PasswordAssessment {
        evaluate_password_policy(&SecretString::new(pwd.to_string().into()))
    }

    const ALL_MESSAGES: [&str; 5] = [
        "Password should be at least 8 characters long",
        "Add numbers",
        "Add lowercase letters",
        "Add uppercase letters",
        "Add special characters",
    ];

    #[test]
    fn test_evaluate_empty_password() {
        let assessment = evaluate("");
        assert_eq!(assessment.score(), 0);
        assert_eq!(assessment.unmet_rules(), ALL_MESSAGES);
        assert!(!assessment.is_strong());
    }

    #[test]
    fn test_evaluate_single_lowercase_char() {
        let assessment = evaluate("a");
        assert_eq!(assessment.score(), 1);
        assert_eq!(
            assessment.unmet_rules(),
            [
                "Password should be at least 8 characters long",
                "Add numbers",
                "Add uppercase letters",
                "Add special characters",
            ]
        );
    }

    #[test]
    fn test_evaluate_strong_password() {
        let assessment = evaluate("Aa1!aaaa");
        assert_eq!(assessment.score(), 5);
        assert!(assessment.unmet_rules().is_empty());
        assert!(assessment.is_strong());
    }

    #[test]
    fn test_evaluate_lowercase_only_at_minimum_length() {
        let assessment = evaluate("aaaaaaaa");
        assert_eq!(assessment.score(), 2);
        assert_eq!(
            assessment.unmet_rules(),
            ["Add numbers", "Add uppercase letters", "Add special characters"]
        );
    }

    #[test]
    fn test_evaluate_reports_in_rule_order() {
        // Only uppercase and length fail here; length must still come first.
        let assessment = evaluate("a1!");
        assert_eq!(
            assessment.unmet_rules(),
            [
                "Password should be at least 8 characters long",
                "Add uppercase letters",
            ]
        );

        let assessment = evaluate("ABCDEFGH");
        assert_eq!(
            assessment.unmet_rules(),
            ["Add numbers", "Add lowercase letters", "Add special characters"]
        );
    }

    #[test]
    fn test_evaluate_score_plus_unmet_is_rule_count() {
        let passwords = [
            "",
            "a",
            "A",
            "1",
            "!",
            " ",
            "password",
            "PASSWORD1",
            "MyPass123!",
            "ééééééééé",
            "日本語のパスワード",
            "VeryStrongPassword123!@#",
        ];

        for pwd in passwords {
            let assessment = evaluate(pwd);
            assert_eq!(
                assessment.score() as usize + assessment.unmet_rules().len(),
                RULE_COUNT as usize,
                "invariant broken for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_non_bmp_password_meets_length() {
        let assessment = evaluate("😀😀😀😀");
        assert_eq!(assessment.score(), 2);
        assert_eq!(
            assessment.unmet_rules(),
            ["Add numbers", "Add lowercase letters", "Add uppercase letters"]
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "abc", "Aa1!aaaa", "NoSpecial123"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_evaluate_long_password() {
        let pwd = "aB3$".repeat(10_000);
        assert_eq!(evaluate(&pwd).score(), 5);
    }
}
