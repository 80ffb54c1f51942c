//! Deliveries: outbound forwarding attempts of captured events.

use super::{DeliveryId, EventId, HeaderValues};
use crate::pagination::{PageParams, Paginated};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Terminal status of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Delivered,
    Failed,
    Timeout,
}

impl DeliveryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Timeout => "timeout",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct Delivery {
    pub id: DeliveryId,
    /// Set when this attempt was queued by a manual retry.
    #[serde(default)]
    pub parent_delivery_id: Option<DeliveryId>,
    pub status: DeliveryStatus,
    pub event_id: EventId,
    pub destination_url: String,
    #[serde(default)]
    pub response_status: Option<u16>,
    #[serde(default)]
    pub response_headers: Option<HashMap<String, HeaderValues>>,
    #[serde(default)]
    pub response_body: Option<serde_json::Value>,
    /// Round-trip duration in milliseconds.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Filters for `GET /deliveries`. Dates are ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDeliveriesParams {
    pub page: PageParams,
    pub status: Option<DeliveryStatus>,
    pub event_id: Option<EventId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Paginated for ListDeliveriesParams {
    fn page(&self) -> &PageParams {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageParams {
        &mut self.page
    }
}

impl ListDeliveriesParams {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status".to_owned(), status.as_str().to_owned()));
        }
        if let Some(event_id) = &self.event_id {
            pairs.push(("event_id".to_owned(), event_id.as_str().to_owned()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date".to_owned(), start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date".to_owned(), end_date.clone()));
        }
        self.page.append_query(pairs)
    }
}

/// One page of deliveries, most recent first (server ordering).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct DeliveryList {
    pub deliveries: Vec<Delivery>,
    pub has_next: bool,
    pub limit: i64,
    pub offset: i64,
}

/// Snapshot of the delivery queue. Returned without the usual envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct QueueStats {
    pub waiting: i64,
    pub active: i64,
    pub completed: i64,
    pub failed: i64,
    pub delayed: i64,
}
