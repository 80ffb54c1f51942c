use std::time::Duration;

use anyhow::Result;
#[cfg(feature = "async")]
use http::StatusCode;
#[cfg(feature = "blocking")]
use hookfreight_sdk::BlockingClient;
#[cfg(feature = "async")]
use hookfreight_sdk::{Client, CreateAppParams, CreateEndpointParams, Error, ListEventsParams};
#[cfg(feature = "async")]
use hookfreight_sdk::{AppId, AuthStatus, EndpointId, PageParams};
#[cfg(feature = "blocking")]
use hookfreight_sdk::{DeliveryStatus, ListDeliveriesParams};
use serde_json::json;
#[cfg(feature = "blocking")]
use tokio::task;
use wiremock::matchers::query_param;
use wiremock::{
    Match, Mock, MockServer, Request, ResponseTemplate,
    matchers::{header, method, path},
};

/// Matches only requests that carry no `Authorization` header at all.
#[derive(Clone, Copy)]
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("Authorization")
    }
}

/// Matches only JSON object bodies that lack every one of the given keys.
#[derive(Clone, Copy)]
struct BodyLacksKeys(&'static [&'static str]);

impl Match for BodyLacksKeys {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
            return false;
        };
        let Some(object) = body.as_object() else {
            return false;
        };
        self.0.iter().all(|key| !object.contains_key(*key))
    }
}

#[cfg(feature = "async")]
fn enveloped(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "message": "ok", "data": data }))
}

#[cfg(feature = "async")]
fn app_page() -> serde_json::Value {
    json!({
        "apps": [{
            "id": "app_1",
            "name": "demo",
            "createdAt": "2026-08-01T00:00:00Z",
            "updatedAt": "2026-08-02T00:00:00Z"
        }],
        "has_next": false,
        "limit": 20,
        "offset": 0
    })
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_client_sends_bearer_token_and_unwraps_envelope() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(header("Authorization", "Bearer hf_sk_test"))
        .and(header("Content-Type", "application/json"))
        .respond_with(enveloped(app_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .api_key("hf_sk_test")
        .build()?;

    let page = client.apps().list(None).await?;
    assert_eq!(page.apps.len(), 1);
    assert_eq!(page.apps[0].name, "demo");
    assert!(!page.has_next);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_client_omits_authorization_without_api_key() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(NoAuthorizationHeader)
        .respond_with(enveloped(app_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    client.apps().list(None).await?;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_list_apps_clamps_limit_to_resource_maximum() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(query_param("limit", "1000"))
        .respond_with(enveloped(app_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    client
        .apps()
        .list(Some(PageParams::new(None, 5000)))
        .await?;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_events_list_passes_filters_as_query() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("endpoint_id", "ep_9"))
        .and(query_param("auth_status", "passed"))
        .and(query_param("limit", "50"))
        .respond_with(enveloped(json!({
            "events": [],
            "has_next": false,
            "limit": 50,
            "offset": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let page = client
        .events()
        .list(Some(ListEventsParams {
            page: PageParams::new(None, 9000), // clamped to the events maximum of 50
            endpoint_id: Some(EndpointId::new("ep_9")),
            auth_status: Some(AuthStatus::Passed),
            ..Default::default()
        }))
        .await?;
    assert!(page.events.is_empty());

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_not_found_carries_server_message() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/app_x"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "app not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let err = client
        .apps()
        .get(AppId::new("app_x"))
        .await
        .expect_err("expected HTTP error");

    match err {
        Error::NotFound(http) => {
            assert_eq!(http.status, StatusCode::NOT_FOUND);
            assert_eq!(http.message(), "app not found");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_validation_error_extracts_field_errors() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "invalid",
            "errors": [{ "field": "name" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let err = client
        .apps()
        .create(&CreateAppParams {
            name: String::new(),
            description: None,
        })
        .await
        .expect_err("expected validation error");

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    let errors = err.field_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field.as_deref(), Some("name"));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_each_known_status_maps_to_its_error_kind() -> Result<()> {
    use hookfreight_sdk::ErrorKind;

    let cases = [
        (400, ErrorKind::Validation),
        (401, ErrorKind::Authentication),
        (403, ErrorKind::Permission),
        (404, ErrorKind::NotFound),
        (418, ErrorKind::Api),
        (500, ErrorKind::Api),
    ];

    for (status, kind) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "nope"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::builder().base_url(server.uri()).build()?;
        let err = client.apps().list(None).await.expect_err("expected error");
        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));

        server.verify().await;
    }

    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_queue_stats_is_returned_unwrapped() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deliveries/queue/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "waiting": 3,
            "active": 1,
            "completed": 10,
            "failed": 0,
            "delayed": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let stats = client.deliveries().queue_stats().await?;
    assert_eq!(stats.waiting, 3);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 10);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_create_endpoint_omits_unset_optional_fields() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/endpoints"))
        .and(BodyLacksKeys(&[
            "description",
            "authentication",
            "http_timeout",
            "rate_limit",
        ]))
        .respond_with(enveloped(json!({
            "id": "ep_1",
            "name": "Stripe Webhooks",
            "app_id": "app_1",
            "http_timeout": 10000,
            "is_active": true,
            "rate_limit": 60,
            "rate_limit_duration": 60000,
            "forward_url": "https://example.com/webhooks/stripe",
            "forwarding_enabled": true,
            "hook_token": "tok_1",
            "createdAt": "2026-08-01T00:00:00Z",
            "updatedAt": "2026-08-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let endpoint = client
        .endpoints()
        .create(&CreateEndpointParams {
            name: "Stripe Webhooks".to_owned(),
            app_id: AppId::new("app_1"),
            forward_url: "https://example.com/webhooks/stripe".to_owned(),
            ..Default::default()
        })
        .await?;
    assert_eq!(endpoint.id.as_str(), "ep_1");

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_replay_event_returns_unit() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/evt_1/replay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "queued",
            "data": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    client.events().replay("evt_1").await?;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_redirect_status_is_classified_as_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/evt_1/replay"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder().base_url(server.uri()).build()?;
    let err = client
        .events()
        .replay("evt_1")
        .await
        .expect_err("3xx must not be treated as success");

    match err {
        Error::Api(http) => assert_eq!(http.status.as_u16(), 304),
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_timeout_is_distinct_from_network_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(enveloped(app_page()).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let slow = Client::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()?;
    let err = slow.apps().list(None).await.expect_err("expected timeout");
    assert!(err.is_timeout(), "unexpected error variant: {err:?}");
    assert_eq!(err.status(), None);

    // A refused connection is a network error, not a timeout.
    let refused = Client::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()?;
    let err = refused
        .apps()
        .list(None)
        .await
        .expect_err("expected network error");
    match err {
        Error::Network { .. } => {}
        other => panic!("unexpected error variant: {other:?}"),
    }

    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_client_lists_deliveries_with_status_filter() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deliveries"))
        .and(query_param("status", "failed"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "data": {
                "deliveries": [{
                    "id": "dlv_1",
                    "status": "failed",
                    "event_id": "evt_1",
                    "destination_url": "https://example.com/hook",
                    "error_message": "connection refused",
                    "createdAt": "2026-08-20T10:00:00Z",
                    "updatedAt": "2026-08-20T10:00:01Z"
                }],
                "has_next": false,
                "limit": 100,
                "offset": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder().base_url(base_url).build()?;

        let page = client.deliveries().list(Some(ListDeliveriesParams {
            page: hookfreight_sdk::PageParams::new(None, 100),
            status: Some(DeliveryStatus::Failed),
            ..Default::default()
        }))?;
        assert_eq!(page.deliveries.len(), 1);
        assert_eq!(page.deliveries[0].status, DeliveryStatus::Failed);
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_client_classifies_authentication_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid API key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder()
            .base_url(base_url)
            .api_key("hf_sk_bad")
            .build()?;

        let err = client.apps().list(None).expect_err("expected auth error");
        match err {
            hookfreight_sdk::Error::Authentication(http) => {
                assert_eq!(http.message(), "invalid API key");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}
