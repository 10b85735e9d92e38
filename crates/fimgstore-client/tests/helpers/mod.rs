//! Shared fixtures for the client integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::time::Duration;

use fimgstore_client::{Credentials, FimgStoreClient};
use fimgstore_core::{EndpointConfig, FileKey, RetryPolicy, Scheme};
use url::Url;

pub const TEST_KEY: &str = "DWWAGAYXTSHYTZVPLTYJSKBF";
pub const OTHER_KEY: &str = "A1B2C3D4E5F6G7H8I9J0K1L2";
pub const THIRD_KEY: &str = "QQQQAGAYXTSHYTZVPLTYJSKB";

pub const TEST_USER: &str = "fimgstore";
pub const TEST_PASSWORD: &str = "secret";
/// `fimgstore:secret` in basic-auth header form.
pub const BASIC_AUTH: &str = "Basic ZmltZ3N0b3JlOnNlY3JldA==";

/// Client pointed at the mock server, with the batch pause disabled.
pub fn client_for(server: &mockito::Server) -> FimgStoreClient {
    let url = Url::parse(&server.url()).unwrap();
    let config = EndpointConfig::from_url(&url).unwrap();
    FimgStoreClient::new(config, Credentials::new(TEST_USER, TEST_PASSWORD))
        .unwrap()
        .with_batch_pause(Duration::ZERO)
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_client() -> FimgStoreClient {
    let config = EndpointConfig::new(Scheme::Http, "127.0.0.1", Some(9), "imagestore").unwrap();
    FimgStoreClient::new(config, Credentials::new(TEST_USER, TEST_PASSWORD)).unwrap()
}

pub fn key(value: &str) -> FileKey {
    FileKey::new(value).unwrap()
}

/// Policy with no waiting between attempts.
pub fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new(max_retries).with_backoff(Duration::ZERO)
}
