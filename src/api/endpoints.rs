use crate::pagination::{MAX_LIMIT_ENDPOINTS, PageParams, clamp_page};
use crate::transport::request::Request;
use crate::{
    AppId, CreateEndpointParams, Endpoint, EndpointId, EndpointList, Error, UpdateEndpointParams,
};

/// Endpoints receive inbound webhooks and forward them to a destination URL.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct EndpointsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl EndpointsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /apps/{id}/endpoints` - paginated; max limit 1000.
    pub async fn list(
        &self,
        app_id: impl Into<AppId>,
        params: Option<PageParams>,
    ) -> Result<EndpointList, Error> {
        let app_id = app_id.into();
        let mut req = Request::get(["apps", app_id.as_str(), "endpoints"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_ENDPOINTS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req).await
    }

    /// `POST /endpoints`
    pub async fn create(&self, params: &CreateEndpointParams) -> Result<Endpoint, Error> {
        let req = Request::post(["endpoints"]).json(params)?;
        self.client.send_enveloped(req).await
    }

    /// `GET /endpoints/{id}`
    pub async fn get(&self, id: impl Into<EndpointId>) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::get(["endpoints", id.as_str()]);
        self.client.send_enveloped(req).await
    }

    /// `PUT /endpoints/{id}`
    pub async fn update(
        &self,
        id: impl Into<EndpointId>,
        params: &UpdateEndpointParams,
    ) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::put(["endpoints", id.as_str()]).json(params)?;
        self.client.send_enveloped(req).await
    }

    /// `DELETE /endpoints/{id}`
    pub async fn delete(&self, id: impl Into<EndpointId>) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::delete(["endpoints", id.as_str()]);
        self.client.send_enveloped(req).await
    }
}

/// Endpoints APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingEndpointsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingEndpointsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /apps/{id}/endpoints` - paginated; max limit 1000.
    pub fn list(
        &self,
        app_id: impl Into<AppId>,
        params: Option<PageParams>,
    ) -> Result<EndpointList, Error> {
        let app_id = app_id.into();
        let mut req = Request::get(["apps", app_id.as_str(), "endpoints"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_ENDPOINTS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req)
    }

    /// `POST /endpoints`
    pub fn create(&self, params: &CreateEndpointParams) -> Result<Endpoint, Error> {
        let req = Request::post(["endpoints"]).json(params)?;
        self.client.send_enveloped(req)
    }

    /// `GET /endpoints/{id}`
    pub fn get(&self, id: impl Into<EndpointId>) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::get(["endpoints", id.as_str()]);
        self.client.send_enveloped(req)
    }

    /// `PUT /endpoints/{id}`
    pub fn update(
        &self,
        id: impl Into<EndpointId>,
        params: &UpdateEndpointParams,
    ) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::put(["endpoints", id.as_str()]).json(params)?;
        self.client.send_enveloped(req)
    }

    /// `DELETE /endpoints/{id}`
    pub fn delete(&self, id: impl Into<EndpointId>) -> Result<Endpoint, Error> {
        let id = id.into();
        let req = Request::delete(["endpoints", id.as_str()]);
        self.client.send_enveloped(req)
    }
}
