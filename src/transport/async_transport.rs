use super::{TransportRequest, TransportResponse};
use crate::Error;
use async_trait::async_trait;
use http::Method;
use reqwest::Client;
use std::{sync::Arc, time::Duration};

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

/// Trait implemented by any async HTTP layer.
#[async_trait]
pub trait AsyncTransport: Send + Sync + 'static {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynAsyncTransport = Arc<dyn AsyncTransport>;

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req).await
    }
}

/// Default async transport built on `reqwest`.
#[derive(Clone)]
pub struct ReqwestAsync {
    client: Client,
}

impl ReqwestAsync {
    /// Construct a new transport.
    ///
    /// * `insecure` - accept invalid TLS certificates.
    /// * `ua` - User-Agent header.
    /// * `timeout` - per-request timeout.
    /// * `connect_timeout` - connection establishment timeout.
    /// * `no_proxy` - ignore system proxy environment variables.
    pub fn try_new(
        insecure: bool,
        ua: &str,
        timeout: Duration,
        connect_timeout: Duration,
        no_proxy: bool,
    ) -> Result<Self, Error> {
        ensure_rustls_provider();

        let mut builder = Client::builder()
            .danger_accept_invalid_certs(insecure)
            .user_agent(ua)
            .connect_timeout(connect_timeout)
            .timeout(timeout);

        if no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| Error::InvalidConfig {
            message: "failed to build async HTTP client".into(),
            source: Some(Box::new(err)),
        })?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(
    err: reqwest::Error,
    method: &Method,
    path: &str,
    timeout: Duration,
) -> Error {
    if err.is_timeout() {
        return Error::Timeout {
            method: method.clone(),
            path: path.to_string().into_boxed_str(),
            timeout,
        };
    }
    Error::Network {
        method: method.clone(),
        path: path.to_string().into_boxed_str(),
        message: err.to_string().into_boxed_str(),
        source: Some(Box::new(err)),
    }
}

#[async_trait]
impl AsyncTransport for ReqwestAsync {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let TransportRequest {
            method,
            url,
            headers,
            query,
            body,
            timeout,
        } = req;
        let path = url.path().to_owned();

        // The per-request timeout covers the whole round trip; dropping the
        // future cancels the in-flight request and its timer.
        let mut request = self
            .client
            .request(method.clone(), url)
            .query(&query)
            .timeout(timeout)
            .headers(headers);

        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, &method, &path, timeout))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e, &method, &path, timeout))?;

        Ok(TransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
