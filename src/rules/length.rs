//! Length rules - emptiness and length bounds.

pub(super) const MIN_LENGTH: usize = 6;
pub(super) const MAX_LENGTH: usize = 20;

pub(super) const NOT_EMPTY_MESSAGE: &str = "password can't be empty";
pub(super) const MIN_LENGTH_MESSAGE: &str = "password must be at least 6 characters long";
pub(super) const MAX_LENGTH_MESSAGE: &str = "password must not exceed 20 characters";

pub(super) fn not_empty(password: &str, _account_id: &str) -> bool {
    !password.is_empty()
}

/// Length is counted in characters, not bytes.
pub(super) fn min_length(password: &str, _account_id: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

pub(super) fn max_length(password: &str, _account_id: &str) -> bool {
    password.chars().count() <= MAX_LENGTH
}
