//! slimhttp: a thin JSON-first facade over an injected HTTP transport
//!
//! The facade builds requests (method, URL, JSON body, headers), merges a
//! fixed set of default headers with caller-supplied ones, threads the
//! request through an ordered chain of plugins, and delegates the actual
//! network send to an injected [`Transport`].
//!
//! # Architecture
//!
//! - [`Client`]: the verb surface (`get`, `post`, `put`, `patch`,
//!   `delete`, `options`) plus plugin registration
//! - [`Transport`], [`RequestFactory`], [`BodyStreamFactory`]: the three
//!   injected capabilities
//! - [`Plugin`]: request/response middleware composed around the transport
//! - [`ReqwestTransport`]: the bundled transport adapter
//!
//! Shared vocabulary types live in the `slimhttp-common` crate.

pub mod client;
pub mod config;
pub mod error;
pub mod plugin;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use config::TransportConfig;
pub use error::{BoxError, Error, Result};
pub use plugin::{Next, Plugin};
pub use request::{
    Body, BodyStreamFactory, DefaultBodyStreamFactory, DefaultRequestFactory, Request,
    RequestFactory,
};
pub use response::{Response, ResponseBuilder};
pub use transport::{ReqwestTransport, Transport};

// Re-export shared types from slimhttp-common
pub use slimhttp_common::{Headers, HttpMethod, HttpStatus};
