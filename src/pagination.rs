//! Pagination clamping shared by every list operation.
//!
//! Each resource family has a server-enforced maximum `limit`; the SDK
//! clamps caller-supplied values into range before the request is built
//! instead of letting the server reject them.

use serde::{Deserialize, Serialize};

/// Server-enforced maximum `limit` for app listings.
pub const MAX_LIMIT_APPS: i64 = 1000;
/// Server-enforced maximum `limit` for endpoint listings.
pub const MAX_LIMIT_ENDPOINTS: i64 = 1000;
/// Server-enforced maximum `limit` for event listings.
pub const MAX_LIMIT_EVENTS: i64 = 50;
/// Server-enforced maximum `limit` for delivery listings.
pub const MAX_LIMIT_DELIVERIES: i64 = 1000;

/// Offset/limit pair accepted by every list endpoint.
///
/// Unset fields are omitted from the outgoing query string entirely, so
/// the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    #[must_use]
    pub fn new(offset: impl Into<Option<i64>>, limit: impl Into<Option<i64>>) -> Self {
        Self {
            offset: offset.into(),
            limit: limit.into(),
        }
    }

    pub(crate) fn append_query(&self, mut pairs: Vec<(String, String)>) -> Vec<(String, String)> {
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_owned(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }
}

/// Implemented by every parameter struct that embeds a [`PageParams`],
/// so filtered listings clamp through the same path as plain ones.
pub trait Paginated {
    fn page(&self) -> &PageParams;
    fn page_mut(&mut self) -> &mut PageParams;
}

impl Paginated for PageParams {
    fn page(&self) -> &PageParams {
        self
    }

    fn page_mut(&mut self) -> &mut PageParams {
        self
    }
}

/// Clamp pagination into the server-accepted range.
///
/// * `None` passes through unchanged; no `limit`/`offset` is sent and the
///   server default applies.
/// * `limit`, if set, is clamped into `[1, max_limit]`.
/// * `offset`, if set, is clamped to a minimum of 0.
///
/// All other fields pass through untouched. Idempotent.
#[must_use]
pub fn clamp_page<P: Paginated>(params: Option<P>, max_limit: i64) -> Option<P> {
    let mut params = params?;
    let page = params.page_mut();
    if let Some(limit) = page.limit {
        page.limit = Some(limit.clamp(1, max_limit));
    }
    if let Some(offset) = page.offset {
        page.offset = Some(offset.max(0));
    }
    Some(params)
}
