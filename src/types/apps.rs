//! Apps: grouping containers for webhook endpoints.

use super::AppId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct App {
    pub id: AppId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Returned by app deletion: the removed app plus how many endpoints
/// were attached to it.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct AppDeleted {
    pub app: App,
    pub connected_endpoints: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAppParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAppParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One page of apps. Ordering is server-defined; the SDK never re-sorts.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct AppList {
    pub apps: Vec<App>,
    pub has_next: bool,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_omit_unset_description() {
        let body = serde_json::to_string(&CreateAppParams {
            name: "My App".to_owned(),
            description: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"My App"}"#);
    }

    #[test]
    fn list_page_deserializes_wire_shape() {
        let list: AppList = serde_json::from_str(
            r#"{
                "apps": [{
                    "id": "app_1",
                    "name": "demo",
                    "createdAt": "2026-08-01T00:00:00Z",
                    "updatedAt": "2026-08-02T00:00:00Z"
                }],
                "has_next": false,
                "limit": 20,
                "offset": 0
            }"#,
        )
        .unwrap();
        assert_eq!(list.apps.len(), 1);
        assert_eq!(list.apps[0].id.as_str(), "app_1");
        assert_eq!(list.apps[0].description, None);
        assert!(!list.has_next);
    }
}
