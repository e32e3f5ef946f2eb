//! Request/response middleware composed around the transport.

use crate::error::BoxError;
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

/// A middleware unit wrapped around the transport.
///
/// Plugins run in registration order; each receives the request and the
/// remainder of the chain. A plugin may rewrite the request before calling
/// [`Next::run`], inspect or replace the response afterwards, or
/// short-circuit without touching the transport at all.
#[async_trait]
pub trait Plugin: Send + Sync {
    async fn handle(&self, request: Request, next: Next<'_>) -> Result<Response, BoxError>;
}

/// The remainder of the plugin chain, ending at the transport.
pub struct Next<'a> {
    pub(crate) transport: &'a dyn Transport,
    pub(crate) rest: &'a [Arc<dyn Plugin>],
}

impl<'a> Next<'a> {
    /// Run the rest of the chain: the next plugin if one remains, the
    /// transport otherwise.
    pub async fn run(self, request: Request) -> Result<Response, BoxError> {
        match self.rest.split_first() {
            Some((plugin, rest)) => {
                plugin
                    .handle(
                        request,
                        Next {
                            transport: self.transport,
                            rest,
                        },
                    )
                    .await
            }
            None => self.transport.send(request).await,
        }
    }
}
