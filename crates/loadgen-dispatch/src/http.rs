//! The production request service: one HTTP GET per call.

use crate::error::{RequestError, Result};
use crate::target::RequestTarget;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use std::task::{Context, Poll};
use tower::Service;

/// A tower service that sends a plain GET to the target URL.
///
/// The response body is read to the end and discarded. Any status code counts
/// as success; only transport errors fail the call. Connection reuse is
/// disabled so every request opens its own connection, and no proxy settings
/// are picked up from the environment.
#[derive(Clone, Debug)]
pub struct HttpGet {
    client: reqwest::Client,
}

impl HttpGet {
    /// Creates the service with a fresh client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()
            .map_err(RequestError::Client)?;
        Ok(Self { client })
    }

}

impl Service<RequestTarget> for HttpGet {
    type Response = StatusCode;
    type Error = RequestError;
    type Future = BoxFuture<'static, Result<StatusCode>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, target: RequestTarget) -> Self::Future {
        let client = self.client.clone();
        Box::pin(async move {
            // The URL is already on the report line, keep it out of the description.
            let response = client
                .get(&target.url)
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.without_url()))?;
            let status = response.status();
            response
                .bytes()
                .await
                .map_err(|e| RequestError::Transport(e.without_url()))?;
            Ok(status)
        })
    }
}
