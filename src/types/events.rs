//! Events: captured inbound webhook requests.

use super::{EndpointId, EventId, HeaderValues};
use crate::pagination::{PageParams, Paginated};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of the endpoint's authentication check at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Passed,
    Unauthorized,
    Disabled,
}

impl AuthStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Unauthorized => "unauthorized",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct WebhookEvent {
    pub id: EventId,
    pub endpoint_id: EndpointId,
    // Misspelled on the wire; kept verbatim for compatibility.
    #[serde(rename = "recieved_at")]
    pub received_at: String,
    pub method: String,
    pub original_url: String,
    pub path: String,
    pub headers: HashMap<String, HeaderValues>,
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub size_bytes: i64,
    #[serde(default)]
    pub auth_status: Option<AuthStatus>,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub body: serde_json::Value,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Filters for `GET /events`. Dates are ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEventsParams {
    pub page: PageParams,
    pub endpoint_id: Option<EndpointId>,
    pub method: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub auth_status: Option<AuthStatus>,
}

impl Paginated for ListEventsParams {
    fn page(&self) -> &PageParams {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageParams {
        &mut self.page
    }
}

impl ListEventsParams {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(endpoint_id) = &self.endpoint_id {
            pairs.push(("endpoint_id".to_owned(), endpoint_id.as_str().to_owned()));
        }
        if let Some(method) = &self.method {
            pairs.push(("method".to_owned(), method.clone()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date".to_owned(), start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date".to_owned(), end_date.clone()));
        }
        if let Some(auth_status) = self.auth_status {
            pairs.push(("auth_status".to_owned(), auth_status.as_str().to_owned()));
        }
        self.page.append_query(pairs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct EventList {
    pub events: Vec<WebhookEvent>,
    pub has_next: bool,
    pub limit: i64,
    pub offset: i64,
}
