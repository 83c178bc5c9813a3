//! The value object produced by each policy evaluation.

/// Number of composition rules checked by the evaluator.
pub const RULE_COUNT: u8 = 5;

/// Outcome of evaluating one password against the composition policy.
///
/// `score() + unmet_rules().len() == 5` holds for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    score: u8,
    unmet_rules: Vec<&'static str>,
}

impl PasswordAssessment {
    pub(crate) fn new(score: u8, unmet_rules: Vec<&'static str>) -> Self {
        debug_assert_eq!(score as usize + unmet_rules.len(), RULE_COUNT as usize);
        Self { score, unmet_rules }
    }

    /// Count of satisfied rules, 0 to 5.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Feedback for every failed rule, in rule order.
    pub fn unmet_rules(&self) -> &[&'static str] {
        &self.unmet_rules
    }

    /// Whether every rule passed.
    pub fn is_strong(&self) -> bool {
        self.unmet_rules.is_empty()
    }
}
