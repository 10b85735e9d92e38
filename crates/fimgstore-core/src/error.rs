//! Error types for the core crate.
//!
//! All validation and URI-assembly failures are unified under `StoreError`.
//! Everything here is raised before any network I/O happens; transport-level
//! errors live in the client crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file key is empty")]
    EmptyKey,

    #[error("file key format is corrupt: {0}")]
    MalformedKey(String),

    #[error("scale percentage must be at least 1, got {0}")]
    InvalidScalePercentage(u32),

    #[error("blackening polygon has no points")]
    EmptyPolygon,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("endpoint has no host")]
    MissingHost,

    #[error("URI could not be built: {0}")]
    UriBuild(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_key_message_carries_offending_string() {
        let err = StoreError::MalformedKey("short".to_string());
        assert_eq!(err.to_string(), "file key format is corrupt: short");
    }

    #[test]
    fn test_parse_error_converts_to_uri_build() {
        let parse_err = url::Url::parse("http://").unwrap_err();
        let err = StoreError::from(parse_err);
        assert!(matches!(err, StoreError::UriBuild(_)));
    }
}
