//! HTTP response types.

use slimhttp_common::{Headers, HttpStatus};
use std::borrow::Cow;

/// Response returned unmodified from the transport.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    pub headers: Headers,

    /// Response body as bytes
    pub body: Vec<u8>,

    /// Final URL (may differ from the request URL due to redirects)
    pub url: String,
}

impl Response {
    /// Returns the HTTP status.
    pub fn status(&self) -> HttpStatus {
        HttpStatus(self.status_code)
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }

    /// Get body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Get body as JSON
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }

    /// Get body as JSON and deserialize to type
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Get raw bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Check if content type is JSON
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}

/// Builder for creating [`Response`] values, mainly useful for stub
/// transports in tests.
#[derive(Debug)]
pub struct ResponseBuilder {
    status_code: u16,
    headers: Headers,
    body: Vec<u8>,
    url: String,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            headers: Headers::new(),
            body: Vec::new(),
            url: String::new(),
        }
    }

    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            headers: self.headers,
            body: self.body,
            url: self.url,
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a reqwest response into the facade's [`Response`].
pub async fn from_reqwest(response: reqwest::Response) -> Result<Response, reqwest::Error> {
    let status_code = response.status().as_u16();
    let url = response.url().to_string();

    let mut headers = Headers::new();
    for (name, value) in response.headers().iter() {
        if let Ok(v) = value.to_str() {
            headers.insert(name.as_str(), v);
        }
    }

    let body = response.bytes().await?.to_vec();

    Ok(Response {
        status_code,
        headers,
        body,
        url,
    })
}
