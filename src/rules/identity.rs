//! Identity rule - rejects passwords that embed the account identifier.

pub(super) const NO_USERNAME_MESSAGE: &str = "password must not contain the username";

/// Case-sensitive substring check. An empty account id disables the rule.
pub(super) fn no_username(password: &str, account_id: &str) -> bool {
    account_id.is_empty() || !password.contains(account_id)
}
