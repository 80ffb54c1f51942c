use crate::Error;
use http::{HeaderMap, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// One outgoing request, described as method + path segments + query + body.
///
/// Built fresh per call by the resource services and never reused. Path
/// segments are percent-encoded when the URL is resolved, so identifiers
/// may contain arbitrary text.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    #[must_use]
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    #[must_use]
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    #[must_use]
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    #[must_use]
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a JSON body. Fields the payload type skips during
    /// serialization are absent from the wire, never null-filled.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(payload).map_err(|err| Error::InvalidConfig {
            message: "failed to serialize request body".into(),
            source: Some(Box::new(err)),
        })?;
        self.body = Some(bytes);
        Ok(self)
    }
}

/// A 2xx response with its body already parsed per the declared content type.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// JSON bodies parsed as-is; non-JSON bodies as a string value.
    pub body: Value,
}

impl Response {
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        name: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<&'static str>,
    }

    #[test]
    fn query_pairs_preserve_insertion_order() {
        let req = Request::get(["events"])
            .query_pair("endpoint_id", "ep_1")
            .query_pair("limit", "50")
            .query_pair("offset", "0");
        assert_eq!(
            req.query,
            vec![
                ("endpoint_id".to_owned(), "ep_1".to_owned()),
                ("limit".to_owned(), "50".to_owned()),
                ("offset".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn json_body_omits_skipped_fields() {
        let req = Request::post(["apps"])
            .json(&Payload {
                name: "demo",
                description: None,
            })
            .unwrap();
        assert_eq!(req.body.as_deref(), Some(br#"{"name":"demo"}"# as &[u8]));
    }
}
