//! Pattern rules - whitespace and repeated characters.

pub(super) const NO_SPACES_MESSAGE: &str = "password must not contain spaces";
pub(super) const NO_CONSECUTIVE_MESSAGE: &str =
    "password must not contain 4 identical consecutive characters";

const MAX_IDENTICAL_RUN: usize = 3;

/// Sequences treated as predictable by the strength scorer.
const COMMON_SEQUENCES: [&str; 3] = ["123", "abc", "qwerty"];

/// Length of the longest run of one repeated character.
pub(crate) fn longest_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in password.chars() {
        if previous == Some(c) {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

/// Case-insensitive search for `123`, `abc` or `qwerty`.
pub(crate) fn contains_common_sequence(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

pub(super) fn no_spaces(password: &str, _account_id: &str) -> bool {
    !password.chars().any(char::is_whitespace)
}

pub(super) fn no_consecutive_chars(password: &str, _account_id: &str) -> bool {
    longest_run(password) <= MAX_IDENTICAL_RUN
}
