//! Common types for the slimhttp crates
//!
//! This crate provides the shared HTTP vocabulary used by the client facade.

pub mod headers;
pub mod http;

pub use headers::Headers;
pub use http::{HttpMethod, HttpStatus};
