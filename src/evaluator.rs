//! Password evaluator - applies the selected rules and combines the verdict.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::blacklist::Blacklist;
use crate::rules::Rule;
use crate::selection::RuleSelection;
use crate::strength::{StrengthClass, score_str};
use crate::types::ValidationResult;

static DEFAULT_SELECTION: LazyLock<RuleSelection> = LazyLock::new(RuleSelection::all);

/// Evaluates a password against the selected rules.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `account_id` - Account identifier for the `noUsername` rule; empty disables it
/// * `selection` - Rules to apply; `None` applies every rule plus strength evaluation
///
/// # Returns
/// A `ValidationResult` with the verdict and the ordered diagnostics.
///
/// An empty password always fails with the single emptiness message,
/// whatever the selection. `notCommonPassword` consults only the built-in
/// list.
pub fn evaluate(
    password: &SecretString,
    account_id: &str,
    selection: Option<&RuleSelection>,
) -> ValidationResult {
    evaluate_inner(password, account_id, selection, None)
}

/// Same as [`evaluate`], with `notCommonPassword` also rejecting entries of
/// `blacklist`.
pub fn evaluate_with_blacklist(
    password: &SecretString,
    account_id: &str,
    selection: Option<&RuleSelection>,
    blacklist: &Blacklist,
) -> ValidationResult {
    evaluate_inner(password, account_id, selection, Some(blacklist))
}

fn evaluate_inner(
    password: &SecretString,
    account_id: &str,
    selection: Option<&RuleSelection>,
    extended: Option<&Blacklist>,
) -> ValidationResult {
    let pwd = password.expose_secret();

    if !Rule::NotEmpty.check(pwd, account_id) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password evaluated: empty password rejected");
        return ValidationResult::empty_password(Rule::NotEmpty.message());
    }

    let selection = selection.unwrap_or(&*DEFAULT_SELECTION);

    let mut errors: Vec<String> = selection
        .rules()
        .filter(|&rule| rule != Rule::NotEmpty)
        .filter(|rule| !rule.check_with(pwd, account_id, extended))
        .map(|rule| rule.message().to_string())
        .collect();
    let critical = errors.len();

    let strength = selection
        .evaluates_strength()
        .then(|| score_str(pwd).class());
    if let Some(class) = strength {
        errors.push(class.message().to_string());
    }

    let strength_acceptable = strength.is_none_or(StrengthClass::is_acceptable);
    let is_valid = (critical == 0 && strength_acceptable) || errors.is_empty();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: valid={} critical={} strength={:?}",
        is_valid,
        critical,
        strength
    );

    ValidationResult {
        is_valid,
        errors,
        strength,
    }
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    account_id: &str,
    selection: Option<&RuleSelection>,
    tx: mpsc::Sender<ValidationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let result = evaluate(password, account_id, selection);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);

        evaluate_tx(&secret("ValidP@ss123"), "", None, tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert!(result.is_valid);
        assert_eq!(result.strength, Some(StrengthClass::Strong));
    }

    #[tokio::test]
    async fn test_evaluate_tx_with_selection() {
        let (tx, mut rx) = mpsc::channel(1);
        let selection = RuleSelection::none().with(Rule::MinLength);

        evaluate_tx(&secret("Ab1"), "", Some(&selection), tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_evaluate_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic when nobody is listening
        evaluate_tx(&secret("ValidP@ss123"), "", None, tx).await;
    }
}
