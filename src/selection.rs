//! Rule selection - which catalog rules run, and whether strength is scored.

use std::collections::BTreeSet;

use crate::rules::{Rule, lookup};

/// Identifier that switches on strength evaluation in a name-based selection.
pub const STRENGTH_EVALUATION: &str = "strengthEvaluation";

/// An explicit set of rules to apply.
///
/// Rules always run in catalog order, whatever order they were added in.
/// Passing no selection to [`evaluate`](crate::evaluate) is equivalent to
/// [`RuleSelection::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSelection {
    rules: BTreeSet<Rule>,
    strength: bool,
}

impl RuleSelection {
    /// Every catalog rule plus strength evaluation.
    pub fn all() -> Self {
        Self {
            rules: Rule::ALL.into_iter().collect(),
            strength: true,
        }
    }

    /// No rules at all.
    pub fn none() -> Self {
        Self {
            rules: BTreeSet::new(),
            strength: false,
        }
    }

    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.insert(rule);
        self
    }

    #[must_use]
    pub fn with_strength(mut self) -> Self {
        self.strength = true;
        self
    }

    /// Builds a selection from wire identifiers such as `"minLength"` or
    /// `"strengthEvaluation"`. Unknown identifiers are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::none();
        for name in names {
            let name = name.as_ref();
            if name == STRENGTH_EVALUATION {
                selection.strength = true;
            } else if let Some(entry) = lookup(name) {
                selection.rules.insert(entry.rule);
            } else {
                #[cfg(feature = "tracing")]
                tracing::debug!("Ignoring unknown rule: {}", name);
            }
        }
        selection
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    pub fn evaluates_strength(&self) -> bool {
        self.strength
    }

    /// Selected rules in catalog order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && !self.strength
    }
}

impl FromIterator<Rule> for RuleSelection {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
            strength: false,
        }
    }
}
