//! HTTP client for the fimagestore service.
//!
//! Wraps `reqwest` with basic authentication and the URI builder from
//! `fimgstore-core`: file retrieval (plain or transformed), create/upload,
//! and deletion with bounded retry plus best-effort batch deletion. All
//! calls are sequential; nothing here parallelizes internally.

pub mod create;
pub mod delete;
pub mod error;
pub mod retrieve;
mod retry_loop;

use std::env;
use std::time::Duration;

use fimgstore_core::{EndpointConfig, StoreError, UriBuilder};
use reqwest::Client;
use url::Url;

/// Environment variable naming the store base URL.
pub const URL_ENV: &str = "FIMGSTORE_URL";
/// Environment variable naming the basic-auth user.
pub const USER_ENV: &str = "FIMGSTORE_USER";
/// Environment variable naming the basic-auth password.
pub const PASSWORD_ENV: &str = "FIMGSTORE_PASSWORD";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(500);

/// Basic-auth credential pair sent with every request.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// HTTP client for one fimagestore deployment.
#[derive(Clone, Debug)]
pub struct FimgStoreClient {
    client: Client,
    uri: UriBuilder,
    creds: Credentials,
    batch_pause: Duration,
}

impl FimgStoreClient {
    pub fn new(config: EndpointConfig, creds: Credentials) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self {
            client,
            uri: UriBuilder::new(config),
            creds,
            batch_pause: DEFAULT_BATCH_PAUSE,
        })
    }

    /// Create a client from the environment: FIMGSTORE_URL (defaults to the
    /// local development store), FIMGSTORE_USER, FIMGSTORE_PASSWORD.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var(URL_ENV)
            .unwrap_or_else(|_| "http://localhost:8880/imagestore".to_string());
        let username = env::var(USER_ENV).map_err(|_| ClientError::MissingEnv(USER_ENV))?;
        let password =
            env::var(PASSWORD_ENV).map_err(|_| ClientError::MissingEnv(PASSWORD_ENV))?;

        let url = Url::parse(&base_url).map_err(StoreError::from)?;
        let config = EndpointConfig::from_url(&url)?;
        Self::new(config, Credentials::new(username, password))
    }

    /// Override the pause between batch-delete items.
    pub fn with_batch_pause(mut self, pause: Duration) -> Self {
        self.batch_pause = pause;
        self
    }

    pub fn uri_builder(&self) -> &UriBuilder {
        &self.uri
    }

    pub fn config(&self) -> &EndpointConfig {
        self.uri.config()
    }

    pub(crate) fn batch_pause(&self) -> Duration {
        self.batch_pause
    }

    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.creds.username, Some(&self.creds.password))
    }

    pub(crate) fn put(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .put(url)
            .basic_auth(&self.creds.username, Some(&self.creds.password))
    }
}

// Re-export the operation types next to the client.
pub use delete::{BatchDeleteResult, KeyOutcome};
pub use error::ClientError;
pub use retrieve::StoredFile;
