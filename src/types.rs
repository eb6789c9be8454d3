//! Strength result types.

use std::fmt;

/// Continuous strength score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: PasswordScore = PasswordScore(0);
    pub const MAX: PasswordScore = PasswordScore(100);

    /// Creates a score, clamping `value` into `0..=100`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Buckets the score: below 40 is weak, below 70 medium, otherwise strong.
    pub fn strength(self) -> PasswordStrength {
        match self.0 {
            0..40 => PasswordStrength::Weak,
            40..70 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    NotEvaluated,
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordStrength::NotEvaluated => "Not evaluated",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        })
    }
}

/// Discrete rating from the number of satisfied criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordRating {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordRating {
    /// Maps the number of satisfied criteria (out of five) to a rating.
    pub fn from_passed(passed: usize) -> Self {
        match passed {
            5.. => PasswordRating::VeryStrong,
            4 => PasswordRating::Strong,
            3 => PasswordRating::Medium,
            2 => PasswordRating::Weak,
            _ => PasswordRating::VeryWeak,
        }
    }
}

impl fmt::Display for PasswordRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordRating::VeryWeak => "Very Weak",
            PasswordRating::Weak => "Weak",
            PasswordRating::Medium => "Medium",
            PasswordRating::Strong => "Strong",
            PasswordRating::VeryStrong => "Very Strong",
        })
    }
}

/// Full result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    /// `None` when the evaluation was cancelled.
    pub score: Option<PasswordScore>,
    pub rating: Option<PasswordRating>,
    /// One message per unmet criterion.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score
            .map(PasswordScore::strength)
            .unwrap_or(PasswordStrength::NotEvaluated)
    }
}
