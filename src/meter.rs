//! Strength meter - maps an assessment to what a form renders.
//!
//! Kept apart from the evaluator so the "Strong password" text and the
//! colour bands never leak into the scored result.

use crate::assessment::{PasswordAssessment, RULE_COUNT};

const STRONG_FEEDBACK: &str = "Strong password";

/// Three-tier visual band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Low,
    Medium,
    High,
}

impl StrengthTier {
    /// `0..=2` is low, `3` is medium, `4` and above is high.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Low,
            3 => StrengthTier::Medium,
            _ => StrengthTier::High,
        }
    }

    /// Bootstrap progress bar class for the tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthTier::Low => "bg-danger",
            StrengthTier::Medium => "bg-warning",
            StrengthTier::High => "bg-success",
        }
    }
}

/// Rendered state of a password strength indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthMeter {
    tier: StrengthTier,
    percent: f64,
    feedback: String,
}

impl StrengthMeter {
    /// Builds the meter state for an assessment.
    pub fn from_assessment(assessment: &PasswordAssessment) -> Self {
        let feedback = if assessment.is_strong() {
            STRONG_FEEDBACK.to_string()
        } else {
            assessment.unmet_rules().join(", ")
        };

        Self {
            tier: StrengthTier::from_score(assessment.score()),
            percent: f64::from(assessment.score()) * 100.0 / f64::from(RULE_COUNT),
            feedback,
        }
    }

    /// Colour band for the score.
    pub fn tier(&self) -> StrengthTier {
        self.tier
    }

    /// Fill width of the progress bar, 0 to 100.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Unmet rules joined with ", ", or "Strong password" when none are unmet.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl From<&PasswordAssessment> for StrengthMeter {
    fn from(assessment: &PasswordAssessment) -> Self {
        StrengthMeter::from_assessment(assessment)
    }
}
