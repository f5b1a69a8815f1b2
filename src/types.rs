//! Validation result returned by the evaluator.

use crate::strength::StrengthClass;

/// Verdict for one password.
///
/// `errors` lists failed rule messages in catalog order, followed by the
/// strength message when strength was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// `None` when strength was not evaluated.
    pub strength: Option<StrengthClass>,
}

impl ValidationResult {
    pub(crate) fn empty_password(message: &str) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.to_string()],
            strength: None,
        }
    }

    /// Number of rule failures, not counting the strength message.
    pub fn critical_count(&self) -> usize {
        self.errors
            .len()
            .saturating_sub(usize::from(self.strength.is_some()))
    }
}
