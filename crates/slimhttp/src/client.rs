//! The plugin-aware request facade.

use crate::config::TransportConfig;
use crate::error::{Error, Result};
use crate::plugin::{Next, Plugin};
use crate::request::{
    BodyStreamFactory, DefaultBodyStreamFactory, DefaultRequestFactory, RequestFactory,
};
use crate::response::Response;
use crate::transport::{ReqwestTransport, Transport};
use serde::Serialize;
use slimhttp_common::{Headers, HttpMethod};
use std::sync::Arc;
use tracing::debug;

/// Thin JSON-first client over an injected transport.
///
/// Construct once with three capabilities (transport, request factory,
/// body-stream factory) and reuse across calls. Every verb call merges the
/// default headers (`Content-Type: application/json`,
/// `Accept: application/json`) with the caller's, caller winning on
/// collisions, then hands the request to the transport. When plugins have
/// been registered the chain is composed around the transport on every
/// send, in registration order.
///
/// Registering a plugin takes `&mut self`, so configuration cannot race
/// with in-flight sends; share a fully configured client behind `Arc` for
/// concurrent use.
///
/// # Example
///
/// ```ignore
/// use slimhttp::{Client, Headers};
///
/// #[tokio::main]
/// async fn main() -> slimhttp::Result<()> {
///     let client = Client::build()?;
///
///     let response = client
///         .post(
///             "https://api.example.com/widgets",
///             &serde_json::json!({"foo": "bar"}),
///             Headers::new(),
///         )
///         .await?;
///     println!("Status: {}", response.status_code);
///
///     Ok(())
/// }
/// ```
pub struct Client {
    transport: Arc<dyn Transport>,
    request_factory: Arc<dyn RequestFactory>,
    body_factory: Arc<dyn BodyStreamFactory>,
    default_headers: Headers,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl Client {
    /// Create a client from the three injected capabilities.
    pub fn new(
        transport: Arc<dyn Transport>,
        request_factory: Arc<dyn RequestFactory>,
        body_factory: Arc<dyn BodyStreamFactory>,
    ) -> Self {
        let mut default_headers = Headers::new();
        default_headers.insert("Content-Type", "application/json");
        default_headers.insert("Accept", "application/json");

        Self {
            transport,
            request_factory,
            body_factory,
            default_headers,
            plugins: Vec::new(),
        }
    }

    /// Create a client with every capability defaulted: a
    /// [`ReqwestTransport`] with [`TransportConfig::default`] and the
    /// crate's default factories.
    pub fn build() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for injecting individual capabilities.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the injected transport.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Append a plugin to the chain. No de-duplication; plugins run in
    /// insertion order on every subsequent send.
    pub fn add_plugin(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    /// The registered plugins, in insertion order.
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str, headers: Headers) -> Result<Response> {
        self.dispatch(HttpMethod::Get, url, None, headers).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post<T>(&self, url: &str, body: &T, headers: Headers) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(Error::Encoding)?;
        self.dispatch(HttpMethod::Post, url, Some(payload), headers)
            .await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put<T>(&self, url: &str, body: &T, headers: Headers) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(Error::Encoding)?;
        self.dispatch(HttpMethod::Put, url, Some(payload), headers)
            .await
    }

    /// Send a PATCH request with a JSON body.
    pub async fn patch<T>(&self, url: &str, body: &T, headers: Headers) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(Error::Encoding)?;
        self.dispatch(HttpMethod::Patch, url, Some(payload), headers)
            .await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, url: &str, headers: Headers) -> Result<Response> {
        self.dispatch(HttpMethod::Delete, url, None, headers).await
    }

    /// Send an OPTIONS request.
    pub async fn options(&self, url: &str, headers: Headers) -> Result<Response> {
        self.dispatch(HttpMethod::Options, url, None, headers).await
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        payload: Option<Vec<u8>>,
        headers: Headers,
    ) -> Result<Response> {
        let mut request = self.request_factory.create(method, url);

        for (name, value) in self.default_headers.merge(&headers).iter() {
            request.headers.insert(name, value);
        }

        if let Some(bytes) = payload {
            request.body = self.body_factory.create(bytes);
        }

        debug!(
            "Dispatching {} {} with {} plugin(s)",
            request.method,
            request.url,
            self.plugins.len()
        );

        let result = if self.plugins.is_empty() {
            self.transport.send(request).await
        } else {
            let next = Next {
                transport: self.transport.as_ref(),
                rest: self.plugins.as_slice(),
            };
            next.run(request).await
        };

        let response = result.map_err(Error::Transport)?;
        debug!("Received status {}", response.status_code);

        Ok(response)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("default_headers", &self.default_headers)
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

/// Builder over the three capabilities; any left unset falls back to the
/// crate default.
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    request_factory: Option<Arc<dyn RequestFactory>>,
    body_factory: Option<Arc<dyn BodyStreamFactory>>,
}

impl ClientBuilder {
    /// Inject the transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Inject the request factory.
    pub fn request_factory(mut self, factory: Arc<dyn RequestFactory>) -> Self {
        self.request_factory = Some(factory);
        self
    }

    /// Inject the body-stream factory.
    pub fn body_factory(mut self, factory: Arc<dyn BodyStreamFactory>) -> Self {
        self.body_factory = Some(factory);
        self
    }

    /// Build the client, defaulting any missing capability.
    pub fn build(self) -> Result<Client> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(TransportConfig::default())
                    .map_err(|e| Error::Transport(Box::new(e)))?,
            ),
        };
        let request_factory = self
            .request_factory
            .unwrap_or_else(|| Arc::new(DefaultRequestFactory));
        let body_factory = self
            .body_factory
            .unwrap_or_else(|| Arc::new(DefaultBodyStreamFactory));

        Ok(Client::new(transport, request_factory, body_factory))
    }
}
