//! High-level blocking Hookfreight client.

use crate::{
    Auth, Envelope, Error, HttpError, api,
    transport::{
        TransportRequest,
        blocking_transport::{DynBlockingTransport, UreqBlocking},
        request::{Request, Response},
    },
    util::{
        diagnostics,
        redact::redact_text,
        url::{display_url, normalize_base_url, route_url},
    },
};
use http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use url::Url;

#[cfg(feature = "tracing")]
use tracing::field;

const DEFAULT_BASE_URL: &str = "https://api.hookfreight.com/v1";
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    base_url: String,
    auth: Option<Auth>,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    read_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
}

impl BlockingClientBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            auth: None,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            no_proxy: false,
            default_headers: HeaderMap::new(),
        }
    }

    /// Point at a self-hosted deployment instead of Hookfreight Cloud.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Authenticate with a Hookfreight Cloud API key (`hf_sk_...`).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = Some(Auth::api_key(key));
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.read_timeout = value;
        self
    }

    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    pub fn build(self) -> Result<BlockingClient, Error> {
        let base = normalize_base_url(&self.base_url)?;

        let mut default_headers = self.default_headers;
        default_headers
            .entry(http::header::CONTENT_TYPE)
            .or_insert(http::HeaderValue::from_static("application/json"));

        let transport: DynBlockingTransport = Arc::new(UreqBlocking::try_new(
            self.insecure,
            &self.user_agent,
            self.timeout,
            self.connect_timeout,
            self.read_timeout,
            self.no_proxy,
        )?);

        Ok(BlockingClient {
            inner: Arc::new(Inner {
                base,
                auth: self.auth,
                timeout: self.timeout,
                default_headers,
                transport,
            }),
        })
    }
}

/// Blocking Hookfreight client. Cheap to clone and safe to share across
/// threads; configuration is immutable after construction.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

struct Inner {
    base: Url,
    auth: Option<Auth>,
    timeout: Duration,
    default_headers: HeaderMap,
    transport: DynBlockingTransport,
}

impl BlockingClient {
    #[must_use]
    pub fn builder() -> BlockingClientBuilder {
        BlockingClientBuilder::new()
    }

    /// Client with defaults: Hookfreight Cloud, no credential.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    #[must_use]
    pub fn apps(&self) -> api::BlockingAppsService {
        api::BlockingAppsService::new(self.clone())
    }

    #[must_use]
    pub fn endpoints(&self) -> api::BlockingEndpointsService {
        api::BlockingEndpointsService::new(self.clone())
    }

    #[must_use]
    pub fn events(&self) -> api::BlockingEventsService {
        api::BlockingEventsService::new(self.clone())
    }

    #[must_use]
    pub fn deliveries(&self) -> api::BlockingDeliveriesService {
        api::BlockingDeliveriesService::new(self.clone())
    }

    pub(crate) fn send_json<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let url = route_url(&self.inner.base, req.segments.iter().map(|s| s.as_str()))?;
        let method = req.method.clone();
        let resp = self.execute_request(&req)?;
        resp.into_json().map_err(|source| Error::Network {
            method,
            path: url.path().to_string().into_boxed_str(),
            message: "failed to decode response body".into(),
            source: Some(Box::new(source)),
        })
    }

    pub(crate) fn send_enveloped<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let envelope: Envelope<T> = self.send_json(req)?;
        Ok(envelope.data)
    }

    pub(crate) fn send_unit(&self, req: Request) -> Result<(), Error> {
        let _ = self.execute_request(&req)?;
        Ok(())
    }

    pub(crate) fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        #[cfg(feature = "metrics")]
        let _inflight = crate::transport::metrics::InFlightGuard::new();

        let url = route_url(&self.inner.base, req.segments.iter().map(|s| s.as_str()))?;

        let mut headers = self.inner.default_headers.clone();
        if let Some(auth) = &self.inner.auth {
            auth.apply(&mut headers)?;
        }

        #[cfg(any(feature = "tracing", feature = "metrics"))]
        let start = std::time::Instant::now();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "hookfreight.request",
            http.method = %req.method,
            http.host = %self.inner.base.host_str().unwrap_or_default(),
            http.path = %url.path(),
            http.status = field::Empty,
            request_id = field::Empty,
            latency_ms = field::Empty,
            error_kind = field::Empty,
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let resp = match self.inner.transport.send(TransportRequest {
            method: req.method.clone(),
            url: url.clone(),
            headers,
            query: req.query.clone(),
            body: req.body.clone(),
            timeout: self.inner.timeout,
        }) {
            Ok(resp) => resp,
            Err(err) => {
                #[cfg(feature = "metrics")]
                crate::transport::metrics::record_outcome(
                    &req.method,
                    err.status(),
                    start.elapsed(),
                    Some(err.kind()),
                );
                #[cfg(feature = "tracing")]
                {
                    span.record("error_kind", field::debug(err.kind()));
                    span.record("latency_ms", start.elapsed().as_millis() as i64);
                }
                return Err(err);
            }
        };

        let request_id = diagnostics::request_id(&resp.headers);

        #[cfg(feature = "tracing")]
        {
            span.record("http.status", resp.status.as_u16() as i64);
            span.record("latency_ms", start.elapsed().as_millis() as i64);
            if let Some(rid) = request_id.as_deref() {
                span.record("request_id", field::display(rid));
            }
        }

        // Bodies declared JSON must parse; anything else is kept as text.
        let body = if resp.body.is_empty() {
            Value::String(String::new())
        } else if diagnostics::content_is_json(&resp.headers) {
            match serde_json::from_slice(&resp.body) {
                Ok(value) => value,
                Err(source) => {
                    let err = Error::Network {
                        method: req.method.clone(),
                        path: url.path().to_string().into_boxed_str(),
                        message: "response declared JSON but body failed to parse".into(),
                        source: Some(Box::new(source)),
                    };
                    #[cfg(feature = "metrics")]
                    crate::transport::metrics::record_outcome(
                        &req.method,
                        None,
                        start.elapsed(),
                        Some(err.kind()),
                    );
                    #[cfg(feature = "tracing")]
                    span.record("error_kind", field::debug(err.kind()));
                    return Err(err);
                }
            }
        } else {
            Value::String(String::from_utf8_lossy(&resp.body).into_owned())
        };

        // Anything outside 2xx is an error, redirects and 1xx included.
        if !resp.status.is_success() {
            let safe_url = display_url(&url);
            let server_message = diagnostics::extract_message(&body)
                .map(|msg| redact_text(msg.into(), self.inner.auth.as_ref()).into_boxed_str());
            let http_error = HttpError {
                status: resp.status,
                method: req.method.clone(),
                url: Box::new(safe_url),
                server_message,
                request_id,
                body: Some(body),
            };

            let err = Error::from_http(http_error);

            #[cfg(feature = "metrics")]
            crate::transport::metrics::record_outcome(
                &req.method,
                err.status(),
                start.elapsed(),
                Some(err.kind()),
            );
            #[cfg(feature = "tracing")]
            span.record("error_kind", field::debug(err.kind()));

            return Err(err);
        }

        let response = Response {
            status: resp.status,
            headers: resp.headers,
            body,
        };

        #[cfg(feature = "metrics")]
        crate::transport::metrics::record_outcome(
            &req.method,
            Some(response.status),
            start.elapsed(),
            None,
        );

        Ok(response)
    }
}
