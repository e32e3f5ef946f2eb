//! The transport capability and the bundled reqwest adapter.

use crate::config::TransportConfig;
use crate::error::BoxError;
use crate::request::{Body, Request};
use crate::response::{from_reqwest, Response};
use async_trait::async_trait;
use slimhttp_common::HttpMethod;

/// Capability to send a request and yield a response.
///
/// Failures are the adapter's own error type, boxed; the facade propagates
/// them verbatim without translation or retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, BoxError>;
}

/// Transport adapter over a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ReqwestTransport {
    /// Build an adapter from the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.gzip)
            .brotli(config.brotli);

        builder = if config.follow_redirects {
            builder.redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        } else {
            builder.redirect(reqwest::redirect::Policy::none())
        };

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn resolve(&self, url: &str) -> Result<String, url::ParseError> {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                let base = url::Url::parse(base)?;
                Ok(base.join(url)?.to_string())
            }
            _ => Ok(url.to_string()),
        }
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Options => reqwest::Method::OPTIONS,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, BoxError> {
        let url = self
            .resolve(&request.url)
            .map_err(|e| Box::new(e) as BoxError)?;

        let mut builder = self.client.request(reqwest_method(request.method), &url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Body::Bytes(bytes) = request.body {
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| Box::new(e) as BoxError)?;

        from_reqwest(response)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }
}
