//! Request values and the injected construction capabilities.

use bytes::Bytes;
use slimhttp_common::{Headers, HttpMethod};

/// Request payload.
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// No payload (GET, DELETE, OPTIONS).
    #[default]
    None,
    /// An in-memory payload, e.g. an encoded JSON document.
    Bytes(Bytes),
}

impl Body {
    /// Returns true if no payload is attached.
    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }

    /// Returns the payload bytes, if any.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::None => None,
            Body::Bytes(bytes) => Some(bytes.as_ref()),
        }
    }
}

/// A fully described outgoing request.
///
/// Each verb call on [`Client`](crate::Client) constructs a fresh value
/// which is consumed by the transport and discarded once the response is
/// obtained.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Body,
}

impl Request {
    /// Create a request with no headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: Body::None,
        }
    }
}

/// Capability to turn `(method, url)` into a request value.
pub trait RequestFactory: Send + Sync {
    fn create(&self, method: HttpMethod, url: &str) -> Request;
}

/// Factory producing bare [`Request`] values.
#[derive(Debug, Default)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create(&self, method: HttpMethod, url: &str) -> Request {
        Request::new(method, url)
    }
}

/// Capability to turn encoded bytes into a request payload.
pub trait BodyStreamFactory: Send + Sync {
    fn create(&self, bytes: Vec<u8>) -> Body;
}

/// Factory wrapping encoded bytes in an in-memory [`Body`].
#[derive(Debug, Default)]
pub struct DefaultBodyStreamFactory;

impl BodyStreamFactory for DefaultBodyStreamFactory {
    fn create(&self, bytes: Vec<u8>) -> Body {
        Body::Bytes(Bytes::from(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_factory_creates_bare_request() {
        let request = DefaultRequestFactory.create(HttpMethod::Get, "https://example.com/users");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com/users");
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_default_body_stream_factory_wraps_bytes() {
        let body = DefaultBodyStreamFactory.create(b"{\"foo\":\"bar\"}".to_vec());

        assert!(!body.is_none());
        assert_eq!(body.as_bytes(), Some(br#"{"foo":"bar"}"#.as_slice()));
    }
}
