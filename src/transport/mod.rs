//! HTTP transports: the byte-moving layer beneath the clients.
//!
//! A transport executes exactly one request and maps low-level failures to
//! [`Error::Timeout`](crate::Error::Timeout) or
//! [`Error::Network`](crate::Error::Network). Status classification and body
//! parsing happen above, in the client.

use http::{HeaderMap, Method, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod request;

/// Fully-resolved request handed to a transport. Everything the transport
/// needs is here; it holds no other state.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    /// JSON bytes; `Content-Type` is already present in `headers`.
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
