//! Mock backend setup for integration tests.
//!
//! Re-exports the scripted HTTP client from `arbkeys::adapters::mock` and adds
//! a builder that scripts the credential endpoints by path.

pub use arbkeys::adapters::mock::{MockHttpClient, MockResponse};
pub use arbkeys::api::BackendClient;
// Not every test binary scripts every endpoint
#[allow(unused_imports)]
pub use arbkeys::api::{
    CHECK_CREDENTIALS_PATH, DELETE_CREDENTIALS_PATH, HEALTH_PATH, SAVE_CREDENTIALS_PATH,
    VALIDATE_CREDENTIALS_PATH,
};
pub use arbkeys::traits::HttpError;

use serde_json::Value;
use std::sync::Arc;

/// Base URL every mock backend answers on.
pub const MOCK_BASE: &str = "http://mock";

pub fn mock_url(path: &str) -> String {
    format!("{}{}", MOCK_BASE, path)
}

/// Builder for a [`MockHttpClient`] scripted per endpoint path.
pub struct MockBackendConfig {
    client: MockHttpClient,
}

impl MockBackendConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `path` with `json` until told otherwise.
    pub fn with_json(self, path: &str, status: u16, json: Value) -> Self {
        self.client
            .set_response(&mock_url(path), MockResponse::json(status, json));
        self
    }

    /// Queue another answer for `path`. The last queued answer repeats.
    #[allow(dead_code)]
    pub fn then_json(self, path: &str, status: u16, json: Value) -> Self {
        self.client
            .push_response(&mock_url(path), MockResponse::json(status, json));
        self
    }

    /// Make `path` fail at the transport level.
    #[allow(dead_code)]
    pub fn with_transport_error(self, path: &str, error: HttpError) -> Self {
        self.client
            .set_response(&mock_url(path), MockResponse::Error(error));
        self
    }

    /// Build the client plus a [`BackendClient`] sharing it.
    pub fn build(self) -> (MockHttpClient, BackendClient) {
        let backend = BackendClient::new(Arc::new(self.client.clone()), MOCK_BASE);
        (self.client, backend)
    }
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self::new()
    }
}
