//! Endpoints: inbound webhook URLs plus their forwarding rules.

use super::{AppId, EndpointId};
use serde::{Deserialize, Serialize};

/// Shared-secret check applied to inbound requests before capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointAuthentication {
    pub header_name: String,
    pub header_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Endpoint {
    pub id: EndpointId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub app_id: AppId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<EndpointAuthentication>,
    pub http_timeout: i64,
    pub is_active: bool,
    pub rate_limit: i64,
    pub rate_limit_duration: i64,
    pub forward_url: String,
    pub forwarding_enabled: bool,
    pub hook_token: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Unset optional fields are absent from the serialized body, so the
/// server applies its defaults (10s http timeout, active, 60 req/min,
/// forwarding on).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEndpointParams {
    pub name: String,
    pub app_id: AppId,
    pub forward_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<EndpointAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarding_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEndpointParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<EndpointAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarding_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct EndpointList {
    pub endpoints: Vec<Endpoint>,
    pub has_next: bool,
    pub limit: i64,
    pub offset: i64,
}
