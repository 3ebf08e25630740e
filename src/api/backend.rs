//! HTTP client for the dashboard backend's credential endpoints.

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use super::wire::{CheckCredentialsBody, DeleteRequest, OutcomeBody, ValidateBody};
use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::domain::CredentialSubmission;
use crate::error::{classify_http_error, LifecycleError, LifecycleResult, NetworkError};
use crate::traits::{json_headers, Headers, HttpClient, Response};

pub const CHECK_CREDENTIALS_PATH: &str = "/check-credentials";
pub const VALIDATE_CREDENTIALS_PATH: &str = "/validate-credentials";
pub const SAVE_CREDENTIALS_PATH: &str = "/save-credentials";
pub const DELETE_CREDENTIALS_PATH: &str = "/delete-credentials";
pub const HEALTH_PATH: &str = "/health";

/// A decoded response body plus the HTTP status it arrived with.
#[derive(Debug, Clone)]
pub struct ApiReply<T> {
    pub http_status: u16,
    pub body: T,
}

impl<T> ApiReply<T> {
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }
}

/// Client for the credential endpoints.
///
/// Transport failures become [`LifecycleError::Network`]; a body that is not
/// the expected JSON becomes [`LifecycleError::Protocol`]. Interpreting the
/// `status` field is left to the workflows.
#[derive(Clone)]
pub struct BackendClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Create a client over any [`HttpClient`]. A trailing `/` on the base
    /// URL is dropped.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Create a reqwest-backed client from the runtime configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let http = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
            None => ReqwestHttpClient::new(),
        };
        Self::new(Arc::new(http), config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the masked status of every stored credential.
    pub async fn check_credentials(&self) -> LifecycleResult<ApiReply<CheckCredentialsBody>> {
        self.get_json(CHECK_CREDENTIALS_PATH).await
    }

    /// Ask the backend to test a submission against the exchanges.
    pub async fn validate_credentials(
        &self,
        submission: &CredentialSubmission,
    ) -> LifecycleResult<ApiReply<ValidateBody>> {
        tracing::debug!(fields = submission.len(), "Posting credentials for validation");
        self.post_json(VALIDATE_CREDENTIALS_PATH, &submission.to_json())
            .await
    }

    /// Ask the backend to encrypt and store a submission.
    pub async fn save_credentials(
        &self,
        submission: &CredentialSubmission,
    ) -> LifecycleResult<ApiReply<OutcomeBody>> {
        tracing::debug!(fields = submission.len(), "Posting credentials for storage");
        self.post_json(SAVE_CREDENTIALS_PATH, &submission.to_json())
            .await
    }

    /// Remove every stored credential of one exchange.
    pub async fn delete_credentials(&self, exchange: &str) -> LifecycleResult<ApiReply<OutcomeBody>> {
        let body = serde_json::to_string(&DeleteRequest { exchange })
            .map_err(|e| LifecycleError::protocol(DELETE_CREDENTIALS_PATH, e.to_string()))?;
        self.post_json(DELETE_CREDENTIALS_PATH, &body).await
    }

    /// Probe `/health`. Any 2xx counts as healthy.
    pub async fn health(&self) -> Result<bool, NetworkError> {
        let url = self.endpoint(HEALTH_PATH);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| classify_http_error(e, &url))?;
        Ok(response.is_success())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> LifecycleResult<ApiReply<T>> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| classify_http_error(e, &url))?;
        decode(path, response)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &str,
    ) -> LifecycleResult<ApiReply<T>> {
        let url = self.endpoint(path);
        let response = self
            .http
            .post(&url, body, &json_headers())
            .await
            .map_err(|e| classify_http_error(e, &url))?;
        decode(path, response)
    }
}

fn decode<T: DeserializeOwned>(path: &str, response: Response) -> LifecycleResult<ApiReply<T>> {
    match response.json::<T>() {
        Ok(body) => Ok(ApiReply {
            http_status: response.status,
            body,
        }),
        Err(e) => {
            tracing::warn!(endpoint = path, http_status = response.status, error = %e, "Backend returned a non-JSON body");
            Err(LifecycleError::protocol(
                path,
                format!("Invalid response from server (HTTP {})", response.status),
            ))
        }
    }
}
