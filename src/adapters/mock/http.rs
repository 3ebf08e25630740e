//! Mock HTTP client for testing.
//!
//! Responses are scripted per URL. A URL may hold a queue of responses that
//! are consumed in order; the last one is repeated once the queue drains.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status code)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status code.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use arbkeys::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://mock/health",
///     MockResponse::json(200, serde_json::json!({"status": "healthy"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single response for a URL, replacing anything queued before.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), VecDeque::from([response]));
    }

    /// Queue an additional response for a URL.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get recorded requests whose URL ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.url.ends_with(suffix))
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();
        if let Some(queue) = responses.get_mut(url) {
            if queue.len() > 1 {
                return queue.pop_front();
            }
            if let Some(last) = queue.front() {
                return Some(last.clone());
            }
        }
        drop(responses);

        self.default_response.lock().unwrap().clone()
    }

    fn resolve(&self, url: &str) -> Result<Response, HttpError> {
        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.resolve(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.resolve(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_records_request() {
        let client = MockHttpClient::new();
        client.set_response("http://mock/health", MockResponse::json(200, json!({})));

        let response = client.get("http://mock/health", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_post_records_json_body() {
        let client = MockHttpClient::new();
        client.set_response("http://mock/save", MockResponse::json(200, json!({})));

        client
            .post("http://mock/save", r#"{"a_api_key":"x"}"#, &Headers::new())
            .await
            .unwrap();

        let requests = client.requests_to("/save");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].json_body(), Some(json!({"a_api_key": "x"})));
    }

    #[tokio::test]
    async fn test_queued_responses_are_consumed_in_order_and_last_repeats() {
        let client = MockHttpClient::new();
        client.push_response("http://mock/x", MockResponse::json(200, json!({"n": 1})));
        client.push_response("http://mock/x", MockResponse::json(200, json!({"n": 2})));

        let mut seen = Vec::new();
        for _ in 0..3 {
            let r = client.get("http://mock/x", &Headers::new()).await.unwrap();
            let v: serde_json::Value = r.json().unwrap();
            seen.push(v["n"].as_i64().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://mock/slow",
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );

        let result = client.get("http://mock/slow", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("30s".to_string()));
    }

    #[tokio::test]
    async fn test_unconfigured_url_falls_back_to_default_then_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://mock/missing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));

        client.set_default_response(MockResponse::json(404, json!({})));
        let response = client.get("http://mock/missing", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_clear_requests() {
        let client = MockHttpClient::new();
        client.record_request("GET", "http://mock", &Headers::new(), None);
        assert_eq!(client.get_requests().len(), 1);
        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
