//! Heuristic strength classification.
//!
//! The score is the sum of two parts, each 0-4:
//!
//! - character classes present (uppercase, lowercase, digit, special)
//! - structural checks passed (length >= 8, length >= 12, no common
//!   sequence such as `123`/`abc`/`qwerty`, no run of 3 identical chars)
//!
//! The result depends on the password only, never on the rule selection.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{
    contains_common_sequence, has_digit, has_lowercase, has_special_char, has_uppercase,
    longest_run,
};

const GOOD_LENGTH: usize = 8;
const EXCELLENT_LENGTH: usize = 12;
const MAX_RUN: usize = 2;

/// Strength classes, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StrengthClass {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthClass {
    /// Maps a total score (0-8) to its class.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=2 => StrengthClass::TooWeak,
            3..=4 => StrengthClass::Weak,
            5..=6 => StrengthClass::Medium,
            _ => StrengthClass::Strong,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StrengthClass::TooWeak => "password is too weak",
            StrengthClass::Weak => "password is weak",
            StrengthClass::Medium => "password is medium",
            StrengthClass::Strong => "password is strong",
        }
    }

    /// Medium and strong passwords are acceptable to the combination policy.
    pub fn is_acceptable(self) -> bool {
        self >= StrengthClass::Medium
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthClass::TooWeak => "too_weak",
            StrengthClass::Weak => "weak",
            StrengthClass::Medium => "medium",
            StrengthClass::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Score breakdown for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScore {
    pub class_score: u8,
    pub structural_score: u8,
}

impl StrengthScore {
    pub fn total(&self) -> u8 {
        self.class_score + self.structural_score
    }

    pub fn class(&self) -> StrengthClass {
        StrengthClass::from_total(self.total())
    }
}

fn count(checks: &[bool]) -> u8 {
    checks.iter().filter(|&&b| b).count() as u8
}

pub(crate) fn score_str(pwd: &str) -> StrengthScore {
    let len = pwd.chars().count();

    let class_score = count(&[
        has_uppercase(pwd),
        has_lowercase(pwd),
        has_digit(pwd),
        has_special_char(pwd),
    ]);

    let structural_score = count(&[
        len >= GOOD_LENGTH,
        len >= EXCELLENT_LENGTH,
        !contains_common_sequence(pwd),
        longest_run(pwd) <= MAX_RUN,
    ]);

    StrengthScore {
        class_score,
        structural_score,
    }
}

/// Scores a password.
pub fn score_password(password: &SecretString) -> StrengthScore {
    score_str(password.expose_secret())
}

/// Classifies a password.
pub fn evaluate_strength(password: &SecretString) -> StrengthClass {
    score_password(password).class()
}
