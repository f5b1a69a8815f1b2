//! Character variety rules - uppercase, lowercase, digits, special chars.

/// Characters that count as "special".
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub(super) const UPPERCASE_MESSAGE: &str = "password must contain at least one uppercase letter";
pub(super) const LOWERCASE_MESSAGE: &str = "password must contain at least one lowercase letter";
pub(super) const DIGIT_MESSAGE: &str = "password must contain at least one digit";
pub(super) const SPECIAL_CHAR_MESSAGE: &str = "password must contain at least one special character";
pub(super) const COMPLEXITY_MESSAGE: &str = "password must contain at least 3 of the following: \
     uppercase letters, lowercase letters, digits and special characters";

const MIN_CHARACTER_CLASSES: usize = 3;

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special_char(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

pub(super) fn uppercase_rule(password: &str, _account_id: &str) -> bool {
    has_uppercase(password)
}

pub(super) fn lowercase_rule(password: &str, _account_id: &str) -> bool {
    has_lowercase(password)
}

pub(super) fn digit_rule(password: &str, _account_id: &str) -> bool {
    has_digit(password)
}

pub(super) fn special_char_rule(password: &str, _account_id: &str) -> bool {
    has_special_char(password)
}

pub(super) fn complexity_check(password: &str, _account_id: &str) -> bool {
    let present = [
        has_uppercase(password),
        has_lowercase(password),
        has_digit(password),
        has_special_char(password),
    ]
    .iter()
    .filter(|&&b| b)
    .count();
    present >= MIN_CHARACTER_CLASSES
}
