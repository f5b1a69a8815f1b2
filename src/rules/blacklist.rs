//! Blacklist rule - checks if password is a commonly used one.

use crate::blacklist::is_common_password;

pub(super) const COMMON_PASSWORD_MESSAGE: &str = "password must not be a commonly used password";

pub(super) fn not_common_password(password: &str, _account_id: &str) -> bool {
    !is_common_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_common_password() {
        assert!(!not_common_password("password", ""));
        assert!(!not_common_password("PassWord1", ""));
        assert!(!not_common_password("123456789", ""));
    }

    #[test]
    fn test_uncommon_password() {
        assert!(not_common_password("CorrectHorseBatteryStaple!123", ""));
        // Exact match only, not substring
        assert!(not_common_password("password2", ""));
    }
}
