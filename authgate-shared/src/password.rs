//! Password policy evaluation.
//!
//! The client evaluates the policy on every keystroke to drive the strength
//! meter and to block hopeless signup submissions before they hit the
//! network. The API re-enforces the same policy server-side; the client
//! check is an optimization, not a security boundary.

/// Minimum acceptable password length.
pub const MIN_LENGTH: usize = 8;

/// The fixed symbol set accepted by the symbol rule.
pub const SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// One rule of the password policy. All rules are independent and
/// case-sensitive; no rule short-circuits another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PasswordRule {
    /// Every rule, in the order the requirements list displays them.
    pub const ALL: [Self; 5] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Lowercase,
        Self::Digit,
        Self::Symbol,
    ];

    /// Human-readable requirement text for this rule.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Uppercase => "At least 1 uppercase letter (A-Z)",
            Self::Lowercase => "At least 1 lowercase letter (a-z)",
            Self::Digit => "At least 1 number (0-9)",
            Self::Symbol => "At least 1 special symbol (@$!%*?&)",
        }
    }

    fn check(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Symbol => password.chars().any(|c| SYMBOLS.contains(&c)),
        }
    }
}

/// Strength band for the meter fill, derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Fair,
    Strong,
}

/// Result of evaluating a candidate password against the full policy.
///
/// Recomputed on every input event; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    results: [(PasswordRule, bool); 5],
}

/// Evaluate `password` against the fixed five-rule policy.
///
/// Pure and deterministic: safe to call on every keystroke.
#[must_use]
pub fn assess(password: &str) -> PasswordAssessment {
    PasswordAssessment {
        results: PasswordRule::ALL.map(|rule| (rule, rule.check(password))),
    }
}

impl PasswordAssessment {
    /// Whether `rule` is satisfied.
    #[must_use]
    pub fn is_met(&self, rule: PasswordRule) -> bool {
        self.results
            .iter()
            .any(|&(candidate, met)| candidate == rule && met)
    }

    /// Number of rules satisfied.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|&&(_, met)| met).count()
    }

    /// Total number of rules in the policy.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    /// Strength as a rounded percentage of rules met. With five rules this
    /// is always one of 0, 20, 40, 60, 80, 100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn strength_percent(&self) -> u8 {
        let ratio = self.passed_count() as f64 / self.total_count() as f64;
        (ratio * 100.0).round() as u8
    }

    /// "Strong enough to submit": every rule is satisfied.
    #[must_use]
    pub fn all_met(&self) -> bool {
        self.results.iter().all(|&(_, met)| met)
    }

    /// Rules that are not yet satisfied, in display order.
    #[must_use]
    pub fn unmet(&self) -> Vec<PasswordRule> {
        self.results
            .iter()
            .filter(|&&(_, met)| !met)
            .map(|&(rule, _)| rule)
            .collect()
    }

    /// Meter band: below 40% weak, below 80% fair, otherwise strong.
    #[must_use]
    pub fn band(&self) -> StrengthBand {
        match self.strength_percent() {
            0..=39 => StrengthBand::Weak,
            40..=79 => StrengthBand::Fair,
            _ => StrengthBand::Strong,
        }
    }

    /// Rules with their pass/fail state, in display order.
    #[must_use]
    pub fn rules(&self) -> &[(PasswordRule, bool); 5] {
        &self.results
    }
}
