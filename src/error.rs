use http::{Method, StatusCode};
use serde::Deserialize;
use std::{error::Error as StdError, fmt, time::Duration};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    Validation,
    Authentication,
    Permission,
    NotFound,
    Api,
    Timeout,
    Network,
    InvalidConfig,
}

/// One structured entry of a 400 response's `errors` array.
///
/// The server does not guarantee either field; entries that fail to
/// deserialize are skipped rather than failing the whole error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    pub method: Method,
    /// Sanitized URL: no query/fragment/userinfo.
    pub url: Box<Url>,
    /// Message extracted from the body's `message` field, if present.
    pub server_message: Option<Box<str>>,
    pub request_id: Option<Box<str>>,
    /// Response body as parsed by the transport.
    pub body: Option<serde_json::Value>,
}

impl HttpError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Server-provided message, or a fallback embedding the status code.
    #[must_use]
    pub fn message(&self) -> String {
        match self.server_message.as_deref() {
            Some(message) => message.to_owned(),
            None => format!("API request failed with status {}", self.status.as_u16()),
        }
    }
}

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// HTTP 400.
    #[error("{error}")]
    Validation {
        error: HttpError,
        errors: Vec<FieldError>,
    },

    /// HTTP 401.
    #[error("{0}")]
    Authentication(HttpError),

    /// HTTP 403.
    #[error("{0}")]
    Permission(HttpError),

    /// HTTP 404.
    #[error("{0}")]
    NotFound(HttpError),

    /// Any other non-2xx status.
    #[error("{0}")]
    Api(HttpError),

    /// The configured deadline elapsed before a response arrived.
    #[error("request timed out after {}ms ({method} {path})", .timeout.as_millis())]
    Timeout {
        method: Method,
        path: Box<str>,
        timeout: Duration,
    },

    /// Any other transport-level failure (DNS, refused connection, reset,
    /// or a declared-JSON body that failed to parse).
    #[error("network error during {method} {path}: {message}")]
    Network {
        method: Method,
        path: Box<str>,
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Permission(_) => ErrorKind::Permission,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Api(_) => ErrorKind::Api,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Network { .. } => ErrorKind::Network,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.http_error().map(|e| e.status)
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.http_error().and_then(|e| e.request_id.as_deref())
    }

    /// The underlying HTTP error, for the API-class variants.
    #[must_use]
    pub fn http_error(&self) -> Option<&HttpError> {
        match self {
            Self::Validation { error, .. } => Some(error),
            Self::Authentication(e) | Self::Permission(e) | Self::NotFound(e) | Self::Api(e) => {
                Some(e)
            }
            Self::Timeout { .. } | Self::Network { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    /// Field-level validation errors; empty for every non-`Validation` kind.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Classify a non-2xx response. Pure and total: every status maps to
    /// exactly one variant.
    pub(crate) fn from_http(error: HttpError) -> Self {
        match error.status {
            StatusCode::BAD_REQUEST => {
                let errors = field_errors_from_body(error.body.as_ref());
                Self::Validation { error, errors }
            }
            StatusCode::UNAUTHORIZED => Self::Authentication(error),
            StatusCode::FORBIDDEN => Self::Permission(error),
            StatusCode::NOT_FOUND => Self::NotFound(error),
            _ => Self::Api(error),
        }
    }
}

fn field_errors_from_body(body: Option<&serde_json::Value>) -> Vec<FieldError> {
    let Some(entries) = body
        .and_then(|body| body.get("errors"))
        .and_then(|errors| errors.as_array())
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect()
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} ({} {}): {}",
            self.status,
            self.method,
            self.path(),
            self.message()
        )?;
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http_error(status: StatusCode, body: Option<serde_json::Value>) -> HttpError {
        let server_message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .map(|m| m.to_owned().into_boxed_str());
        HttpError {
            status,
            method: Method::GET,
            url: Box::new(Url::parse("https://api.hookfreight.com/v1/apps").unwrap()),
            server_message,
            request_id: None,
            body,
        }
    }

    #[test]
    fn classification_maps_each_status_to_one_kind() {
        let cases = [
            (StatusCode::BAD_REQUEST, ErrorKind::Validation),
            (StatusCode::UNAUTHORIZED, ErrorKind::Authentication),
            (StatusCode::FORBIDDEN, ErrorKind::Permission),
            (StatusCode::NOT_FOUND, ErrorKind::NotFound),
            (StatusCode::CONFLICT, ErrorKind::Api),
            (StatusCode::TOO_MANY_REQUESTS, ErrorKind::Api),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Api),
            (StatusCode::BAD_GATEWAY, ErrorKind::Api),
        ];

        for (status, kind) in cases {
            let err = Error::from_http(http_error(status, None));
            assert_eq!(err.kind(), kind, "status {status}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn validation_extracts_field_errors() {
        let body = json!({
            "message": "invalid",
            "errors": [{ "field": "name" }, { "field": "forward_url", "message": "not a URL" }]
        });
        let err = Error::from_http(http_error(StatusCode::BAD_REQUEST, Some(body)));

        let errors = err.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field.as_deref(), Some("name"));
        assert_eq!(errors[0].message, None);
        assert_eq!(errors[1].message.as_deref(), Some("not a URL"));
    }

    #[test]
    fn validation_without_errors_array_yields_empty_list() {
        let err = Error::from_http(http_error(
            StatusCode::BAD_REQUEST,
            Some(json!({ "message": "invalid" })),
        ));
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn message_prefers_server_message_over_fallback() {
        let with = http_error(StatusCode::NOT_FOUND, Some(json!({ "message": "app not found" })));
        assert_eq!(with.message(), "app not found");

        let without = http_error(StatusCode::IM_A_TEAPOT, None);
        assert_eq!(without.message(), "API request failed with status 418");
    }

    #[test]
    fn timeout_and_network_are_distinct_kinds_without_status() {
        let timeout = Error::Timeout {
            method: Method::GET,
            path: "/v1/apps".into(),
            timeout: Duration::from_millis(30_000),
        };
        let network = Error::Network {
            method: Method::GET,
            path: "/v1/apps".into(),
            message: "connection refused".into(),
            source: None,
        };

        assert_eq!(timeout.kind(), ErrorKind::Timeout);
        assert_eq!(network.kind(), ErrorKind::Network);
        assert!(timeout.is_timeout());
        assert!(!network.is_timeout());
        assert_eq!(timeout.status(), None);
        assert_eq!(network.status(), None);
    }
}
