use http::HeaderMap;
use serde_json::Value;

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    for name in [
        "x-request-id",
        "x-correlation-id",
        "x-amzn-requestid",
        "x-amz-request-id",
    ] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string().into_boxed_str());
            }
        }
    }
    None
}

/// Best-effort human message from an error body's `message` field.
pub(crate) fn extract_message(body: &Value) -> Option<Box<str>> {
    let msg = body.get("message")?.as_str()?.trim();
    if msg.is_empty() {
        return None;
    }
    Some(msg.to_string().into_boxed_str())
}

pub(crate) fn content_is_json(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_id_prefers_first_known_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req_1".parse().unwrap());
        assert_eq!(request_id(&headers).as_deref(), Some("req_1"));
        assert_eq!(request_id(&HeaderMap::new()), None);
    }

    #[test]
    fn extract_message_ignores_blank_and_non_string_values() {
        assert_eq!(
            extract_message(&json!({ "message": "app not found" })).as_deref(),
            Some("app not found")
        );
        assert_eq!(extract_message(&json!({ "message": "  " })), None);
        assert_eq!(extract_message(&json!({ "message": 42 })), None);
        assert_eq!(extract_message(&json!({})), None);
    }

    #[test]
    fn content_is_json_matches_parameterized_content_types() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(content_is_json(&headers));

        headers.insert(http::header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!content_is_json(&headers));
    }
}
