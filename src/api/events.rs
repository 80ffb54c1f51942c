use crate::pagination::{MAX_LIMIT_EVENTS, PageParams, clamp_page};
use crate::transport::request::Request;
use crate::{EndpointId, Error, EventId, EventList, ListEventsParams, WebhookEvent};

/// Captured inbound webhook events.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct EventsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl EventsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /events` - paginated with optional filters; max limit 50.
    pub async fn list(&self, params: Option<ListEventsParams>) -> Result<EventList, Error> {
        let mut req = Request::get(["events"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_EVENTS) {
            req = req.query_pairs(params.query_pairs());
        }
        self.client.send_enveloped(req).await
    }

    /// `GET /events/{id}`
    pub async fn get(&self, id: impl Into<EventId>) -> Result<WebhookEvent, Error> {
        let id = id.into();
        let req = Request::get(["events", id.as_str()]);
        self.client.send_enveloped(req).await
    }

    /// `GET /endpoints/{id}/events` - paginated; max limit 50.
    pub async fn list_by_endpoint(
        &self,
        endpoint_id: impl Into<EndpointId>,
        params: Option<PageParams>,
    ) -> Result<EventList, Error> {
        let endpoint_id = endpoint_id.into();
        let mut req = Request::get(["endpoints", endpoint_id.as_str(), "events"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_EVENTS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req).await
    }

    /// `POST /events/{id}/replay` - queue a redelivery to all connected
    /// endpoints. Fire-and-forget: completion is the server's business.
    pub async fn replay(&self, id: impl Into<EventId>) -> Result<(), Error> {
        let id = id.into();
        let req = Request::post(["events", id.as_str(), "replay"]);
        self.client.send_unit(req).await
    }
}

/// Events APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingEventsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingEventsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /events` - paginated with optional filters; max limit 50.
    pub fn list(&self, params: Option<ListEventsParams>) -> Result<EventList, Error> {
        let mut req = Request::get(["events"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_EVENTS) {
            req = req.query_pairs(params.query_pairs());
        }
        self.client.send_enveloped(req)
    }

    /// `GET /events/{id}`
    pub fn get(&self, id: impl Into<EventId>) -> Result<WebhookEvent, Error> {
        let id = id.into();
        let req = Request::get(["events", id.as_str()]);
        self.client.send_enveloped(req)
    }

    /// `GET /endpoints/{id}/events` - paginated; max limit 50.
    pub fn list_by_endpoint(
        &self,
        endpoint_id: impl Into<EndpointId>,
        params: Option<PageParams>,
    ) -> Result<EventList, Error> {
        let endpoint_id = endpoint_id.into();
        let mut req = Request::get(["endpoints", endpoint_id.as_str(), "events"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_EVENTS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req)
    }

    /// `POST /events/{id}/replay`
    pub fn replay(&self, id: impl Into<EventId>) -> Result<(), Error> {
        let id = id.into();
        let req = Request::post(["events", id.as_str(), "replay"]);
        self.client.send_unit(req)
    }
}
