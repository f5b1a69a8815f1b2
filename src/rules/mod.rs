//! Rule catalog
//!
//! Each rule is a pass/fail predicate over `(password, account_id)` paired
//! with a fixed diagnostic message. The catalog is a static table in
//! evaluation order.

mod blacklist;
mod identity;
mod length;
mod pattern;
mod variety;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::blacklist::Blacklist;

pub(crate) use pattern::{contains_common_sequence, longest_run};
pub(crate) use variety::{has_digit, has_lowercase, has_special_char, has_uppercase};

/// Predicate signature shared by every rule. `true` means satisfied.
pub type RuleCheck = fn(&str, &str) -> bool;

/// Identifiers of the catalog rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Rule {
    NotEmpty,
    MinLength,
    MaxLength,
    HasUppercase,
    HasLowercase,
    HasNumber,
    HasSpecialChar,
    NoSpaces,
    NoConsecutiveChars,
    NoUsername,
    NotCommonPassword,
    ComplexityCheck,
}

/// A catalog row.
#[derive(Debug)]
pub struct RuleEntry {
    pub rule: Rule,
    pub id: &'static str,
    pub check: RuleCheck,
    pub message: &'static str,
}

static CATALOG: [RuleEntry; 12] = [
    RuleEntry {
        rule: Rule::NotEmpty,
        id: "notEmpty",
        check: length::not_empty,
        message: length::NOT_EMPTY_MESSAGE,
    },
    RuleEntry {
        rule: Rule::MinLength,
        id: "minLength",
        check: length::min_length,
        message: length::MIN_LENGTH_MESSAGE,
    },
    RuleEntry {
        rule: Rule::MaxLength,
        id: "maxLength",
        check: length::max_length,
        message: length::MAX_LENGTH_MESSAGE,
    },
    RuleEntry {
        rule: Rule::HasUppercase,
        id: "hasUppercase",
        check: variety::uppercase_rule,
        message: variety::UPPERCASE_MESSAGE,
    },
    RuleEntry {
        rule: Rule::HasLowercase,
        id: "hasLowercase",
        check: variety::lowercase_rule,
        message: variety::LOWERCASE_MESSAGE,
    },
    RuleEntry {
        rule: Rule::HasNumber,
        id: "hasNumber",
        check: variety::digit_rule,
        message: variety::DIGIT_MESSAGE,
    },
    RuleEntry {
        rule: Rule::HasSpecialChar,
        id: "hasSpecialChar",
        check: variety::special_char_rule,
        message: variety::SPECIAL_CHAR_MESSAGE,
    },
    RuleEntry {
        rule: Rule::NoSpaces,
        id: "noSpaces",
        check: pattern::no_spaces,
        message: pattern::NO_SPACES_MESSAGE,
    },
    RuleEntry {
        rule: Rule::NoConsecutiveChars,
        id: "noConsecutiveChars",
        check: pattern::no_consecutive_chars,
        message: pattern::NO_CONSECUTIVE_MESSAGE,
    },
    RuleEntry {
        rule: Rule::NoUsername,
        id: "noUsername",
        check: identity::no_username,
        message: identity::NO_USERNAME_MESSAGE,
    },
    RuleEntry {
        rule: Rule::NotCommonPassword,
        id: "notCommonPassword",
        check: blacklist::not_common_password,
        message: blacklist::COMMON_PASSWORD_MESSAGE,
    },
    RuleEntry {
        rule: Rule::ComplexityCheck,
        id: "complexityCheck",
        check: variety::complexity_check,
        message: variety::COMPLEXITY_MESSAGE,
    },
];

/// Returned when parsing an identifier that is not in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl Rule {
    /// Every catalog rule, in evaluation order.
    pub const ALL: [Rule; 12] = [
        Rule::NotEmpty,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::HasUppercase,
        Rule::HasLowercase,
        Rule::HasNumber,
        Rule::HasSpecialChar,
        Rule::NoSpaces,
        Rule::NoConsecutiveChars,
        Rule::NoUsername,
        Rule::NotCommonPassword,
        Rule::ComplexityCheck,
    ];

    fn entry(self) -> &'static RuleEntry {
        &CATALOG[self as usize]
    }

    /// The wire identifier, e.g. `"minLength"`.
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    pub fn message(self) -> &'static str {
        self.entry().message
    }

    /// Runs the rule's predicate. `true` means the requirement is satisfied.
    pub fn check(self, password: &str, account_id: &str) -> bool {
        (self.entry().check)(password, account_id)
    }

    /// Like [`Rule::check`], but `notCommonPassword` also consults `extended`.
    pub fn check_with(self, password: &str, account_id: &str, extended: Option<&Blacklist>) -> bool {
        match (self, extended) {
            (Rule::NotCommonPassword, Some(list)) => {
                self.check(password, account_id) && !list.contains(password)
            }
            _ => self.check(password, account_id),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
            .map(|entry| entry.rule)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Finds a catalog entry by its identifier.
pub fn lookup(id: &str) -> Option<&'static RuleEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// The whole catalog, in evaluation order.
pub fn catalog() -> &'static [RuleEntry] {
    &CATALOG
}
