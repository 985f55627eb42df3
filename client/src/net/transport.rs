//! HTTP transport seam.
//!
//! Client-side (csr): real fetch calls via `gloo-net`.
//! Native builds: [`FetchTransport`] reports the network as unavailable,
//! since fetch only exists in the browser. Native front ends bring their own
//! [`AuthTransport`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::TransportError;
use super::types::{OutboundRequest, ServerReply};
#[cfg(feature = "csr")]
use super::types::{JSON_CONTENT_TYPE, Method};

#[cfg(not(feature = "csr"))]
const FETCH_UNAVAILABLE: &str = "fetch is not available outside the browser";

/// Sends one request and returns the status and text body.
///
/// Futures are `?Send`: browser fetch futures are tied to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no reply could be obtained. Any HTTP
    /// status, including errors, is a successful exchange.
    async fn send(&self, request: OutboundRequest) -> Result<ServerReply, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl AuthTransport for FetchTransport {
    async fn send(&self, request: OutboundRequest) -> Result<ServerReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            let prepared = match request.json_body {
                Some(body) => builder.header("Content-Type", JSON_CONTENT_TYPE).body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;
            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(ServerReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::new(FETCH_UNAVAILABLE))
        }
    }
}
