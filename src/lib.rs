//! Password validation library
//!
//! This library checks candidate passwords against a fixed catalog of
//! rules and a heuristic strength classifier, and combines the findings
//! into one verdict with ordered, human-readable diagnostics.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serialization of the public types
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Path read by `Blacklist::load` for an extended
//!   common-password list (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, RuleSelection, StrengthClass};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("ValidP@ss123".to_string().into());
//!
//! // All rules plus strength evaluation
//! let result = evaluate(&password, "alice", None);
//! assert!(result.is_valid);
//! assert_eq!(result.strength, Some(StrengthClass::Strong));
//!
//! // Rules chosen by name, e.g. from a request body
//! let selection = RuleSelection::from_names(["minLength", "noUsername"]);
//! let result = evaluate(&password, "P@ss", Some(&selection));
//! assert!(!result.is_valid);
//! ```

mod blacklist;
mod evaluator;
mod rules;
mod selection;
mod strength;
mod types;

// Public API
pub use blacklist::{
    BUILTIN_COMMON_PASSWORDS, Blacklist, BlacklistError, get_blacklist_path, is_common_password,
};
pub use evaluator::{evaluate, evaluate_with_blacklist};
pub use rules::{Rule, RuleCheck, RuleEntry, UnknownRule, catalog, lookup};
pub use selection::{RuleSelection, STRENGTH_EVALUATION};
pub use strength::{StrengthClass, StrengthScore, evaluate_strength, score_password};
pub use types::ValidationResult;

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
