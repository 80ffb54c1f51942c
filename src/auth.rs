use crate::Error;
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use std::fmt;

#[derive(Clone, Default, Eq, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Credential for Hookfreight Cloud. Self-hosted deployments run without one.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Auth {
    /// API key sent as `Authorization: Bearer <key>` (keys start with `hf_sk_`).
    ApiKey { key: SecretString },
}

impl Auth {
    #[must_use]
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: SecretString::new(key),
        }
    }

    pub(crate) fn secrets(&self) -> Vec<&str> {
        match self {
            Self::ApiKey { key } => vec![key.expose()],
        }
    }

    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        let value = match self {
            Self::ApiKey { key } => {
                let raw = format!("Bearer {}", key.expose());
                HeaderValue::from_str(&raw).map_err(|err| Error::InvalidConfig {
                    message: "invalid Authorization header value".into(),
                    source: Some(Box::new(err)),
                })?
            }
        };

        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}
