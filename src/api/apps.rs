use crate::pagination::{MAX_LIMIT_APPS, PageParams, clamp_page};
use crate::transport::request::Request;
use crate::{App, AppDeleted, AppId, AppList, CreateAppParams, Error, UpdateAppParams};

/// Apps group the webhook endpoints of one application.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct AppsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl AppsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /apps` - paginated; max limit 1000.
    pub async fn list(&self, params: Option<PageParams>) -> Result<AppList, Error> {
        let mut req = Request::get(["apps"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_APPS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req).await
    }

    /// `POST /apps`
    pub async fn create(&self, params: &CreateAppParams) -> Result<App, Error> {
        let req = Request::post(["apps"]).json(params)?;
        self.client.send_enveloped(req).await
    }

    /// `GET /apps/{id}`
    pub async fn get(&self, id: impl Into<AppId>) -> Result<App, Error> {
        let id = id.into();
        let req = Request::get(["apps", id.as_str()]);
        self.client.send_enveloped(req).await
    }

    /// `PUT /apps/{id}`
    pub async fn update(
        &self,
        id: impl Into<AppId>,
        params: &UpdateAppParams,
    ) -> Result<App, Error> {
        let id = id.into();
        let req = Request::put(["apps", id.as_str()]).json(params)?;
        self.client.send_enveloped(req).await
    }

    /// `DELETE /apps/{id}` - also removes the app's endpoints.
    pub async fn delete(&self, id: impl Into<AppId>) -> Result<AppDeleted, Error> {
        let id = id.into();
        let req = Request::delete(["apps", id.as_str()]);
        self.client.send_enveloped(req).await
    }
}

/// Apps APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingAppsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingAppsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /apps` - paginated; max limit 1000.
    pub fn list(&self, params: Option<PageParams>) -> Result<AppList, Error> {
        let mut req = Request::get(["apps"]);
        if let Some(params) = clamp_page(params, MAX_LIMIT_APPS) {
            req = req.query_pairs(params.append_query(Vec::new()));
        }
        self.client.send_enveloped(req)
    }

    /// `POST /apps`
    pub fn create(&self, params: &CreateAppParams) -> Result<App, Error> {
        let req = Request::post(["apps"]).json(params)?;
        self.client.send_enveloped(req)
    }

    /// `GET /apps/{id}`
    pub fn get(&self, id: impl Into<AppId>) -> Result<App, Error> {
        let id = id.into();
        let req = Request::get(["apps", id.as_str()]);
        self.client.send_enveloped(req)
    }

    /// `PUT /apps/{id}`
    pub fn update(&self, id: impl Into<AppId>, params: &UpdateAppParams) -> Result<App, Error> {
        let id = id.into();
        let req = Request::put(["apps", id.as_str()]).json(params)?;
        self.client.send_enveloped(req)
    }

    /// `DELETE /apps/{id}` - also removes the app's endpoints.
    pub fn delete(&self, id: impl Into<AppId>) -> Result<AppDeleted, Error> {
        let id = id.into();
        let req = Request::delete(["apps", id.as_str()]);
        self.client.send_enveloped(req)
    }
}
