//! Error types for the client crate.

use fimgstore_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Validation or URI-assembly failure from the core crate; raised
    /// before any network I/O.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request never completed: connect failure, timeout, TLS error.
    /// Authentication failures the transport raises land here too.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the server said no.
    #[error("server rejected the request with status {status}: {body}")]
    RemoteRejection { status: u16, body: String },

    /// The retry budget is spent; wraps the last attempt's cause.
    #[error("giving up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<ClientError>,
    },

    /// A create/upload response that does not carry a file key.
    #[error("unexpected upload response: {0}")]
    UnexpectedResponse(String),

    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}
