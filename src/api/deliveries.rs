use crate::pagination::{MAX_LIMIT_DELIVERIES, PageParams, clamp_page};
use crate::transport::request::Request;
use crate::{DeliveryId, DeliveryList, Error, EventId, ListDeliveriesParams, QueueStats};

/// Delivery attempts and the delivery queue.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct DeliveriesService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl DeliveriesService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /deliveries` - paginated with optional filters; max limit 1000.
    /// Results arrive most recent first.
    pub async fn list(&self, params: Option<ListDeliveriesParams>) -> Result<DeliveryList, Error> {
        let mut req = Request::get(["deliveries"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_DELIVERIES) {
            req = req.query_pairs(params.query_pairs());
        }
        self.client.send_enveloped(req).await
    }

    /// `GET /events/{id}/deliveries` - paginated; max limit 1000.
    pub async fn list_by_event(
        &self,
        event_id: impl Into<EventId>,
        params: Option<PageParams>,
    ) -> Result<DeliveryList, Error> {
        let event_id = event_id.into();
        let mut req = Request::get(["events", event_id.as_str(), "deliveries"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_DELIVERIES) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req).await
    }

    /// `POST /deliveries/{id}/retry` - queue a new delivery attempt.
    pub async fn retry(&self, id: impl Into<DeliveryId>) -> Result<(), Error> {
        let id = id.into();
        let req = Request::post(["deliveries", id.as_str(), "retry"]);
        self.client.send_unit(req).await
    }

    /// `GET /deliveries/queue/stats` - the one route returned without the
    /// `{message, data}` envelope.
    pub async fn queue_stats(&self) -> Result<QueueStats, Error> {
        let req = Request::get(["deliveries", "queue", "stats"]);
        self.client.send_json(req).await
    }
}

/// Deliveries APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingDeliveriesService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingDeliveriesService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /deliveries` - paginated with optional filters; max limit 1000.
    pub fn list(&self, params: Option<ListDeliveriesParams>) -> Result<DeliveryList, Error> {
        let mut req = Request::get(["deliveries"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_DELIVERIES) {
            req = req.query_pairs(params.query_pairs());
        }
        self.client.send_enveloped(req)
    }

    /// `GET /events/{id}/deliveries` - paginated; max limit 1000.
    pub fn list_by_event(
        &self,
        event_id: impl Into<EventId>,
        params: Option<PageParams>,
    ) -> Result<DeliveryList, Error> {
        let event_id = event_id.into();
        let mut req = Request::get(["events", event_id.as_str(), "deliveries"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_DELIVERIES) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req)
    }

    /// `POST /deliveries/{id}/retry` - queue a new delivery attempt.
    pub fn retry(&self, id: impl Into<DeliveryId>) -> Result<(), Error> {
        let id = id.into();
        let req = Request::post(["deliveries", id.as_str(), "retry"]);
        self.client.send_unit(req)
    }

    /// `GET /deliveries/queue/stats` - returned without the envelope.
    pub fn queue_stats(&self) -> Result<QueueStats, Error> {
        let req = Request::get(["deliveries", "queue", "stats"]);
        self.client.send_json(req)
    }
}
