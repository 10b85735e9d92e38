//! Validated fimagestore file keys.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::constants::FILE_KEY_LEN;
use crate::error::StoreError;

static FILE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9A-Za-z]{{{}}}$", FILE_KEY_LEN)).expect("file key pattern compiles")
});

/// A validated file key, the opaque token the server assigns to every
/// stored file.
///
/// Construction is the only validation point: a `FileKey` in hand is always
/// a well-formed 24-character alphanumeric token, so URI assembly and the
/// client operations never re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileKey(String);

impl FileKey {
    /// Validate `key` and wrap it.
    ///
    /// Returns `StoreError::EmptyKey` for an empty string and
    /// `StoreError::MalformedKey` (carrying the offending value) for
    /// anything that does not match the key pattern.
    pub fn new(key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if !FILE_KEY_PATTERN.is_match(&key) {
            return Err(StoreError::MalformedKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FileKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
