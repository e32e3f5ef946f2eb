//! Error types for the request facade.

use thiserror::Error;

/// Boxed error produced by transports and plugins.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`Client`](crate::Client) calls.
///
/// The facade performs no recovery: a call either succeeds with a response
/// or fails with one of these two kinds.
#[derive(Error, Debug)]
pub enum Error {
    /// The body could not be serialized to JSON. Raised before any network
    /// activity takes place.
    #[error("cannot encode JSON body")]
    Encoding(#[source] serde_json::Error),

    /// A failure surfaced by the transport or a plugin, carried verbatim.
    /// Never retried, never translated.
    #[error("{0}")]
    Transport(BoxError),
}

impl Error {
    /// Returns true if the error occurred while encoding the body.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Returns true if the error came out of the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
