//! Common-password deny-lists.
//!
//! The built-in list is part of the rule catalog and never changes.
//! Deployments can load a larger newline-separated list into a
//! [`Blacklist`] at startup and pass it to
//! [`evaluate_with_blacklist`](crate::evaluate_with_blacklist).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Passwords rejected regardless of configuration.
pub const BUILTIN_COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "qwerty",
    "abc123",
    "password1",
    "iloveyou",
];

const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the extended blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Checks a password against the built-in list, ignoring case.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    BUILTIN_COMMON_PASSWORDS.contains(&lowered.as_str())
}

/// An extended deny-list, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads the list from the configured path.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or is empty.
    pub fn load() -> Result<Self, BlacklistError> {
        Self::from_path(get_blacklist_path())
    }

    /// Loads the list from a specific file path.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or is empty.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist: Self = content.lines().collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}
