use super::http_client::HTTPClient;
use super::http_request::{
    fetch_api_get::FetchApiRequest, relaxer_post::RelaxerRequest, request_common::HTTPRequestType,
};
use super::{ApiId, NO_PARAMS, RequestError};
use crate::{ClientConfig, RelaxApi};
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Serialize)]
struct PageQuery {
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

fn api_for(server: &MockServer, prefix: &str) -> RelaxApi {
    RelaxApi::new(&ClientConfig::new(format!("{}{prefix}", server.uri()))).unwrap()
}

#[tokio::test]
async fn test_list_apis_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apidoc"))
        .and(query_param("a", "1"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("listing"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, "/");
    let response = api.get().list_apis(Some(&serde_json::json!({ "a": 1 }))).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "listing");
}

#[tokio::test]
async fn test_list_apis_typed_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/relax/apidoc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = api_for(&server, "/relax/");
    let query = PageQuery { page: 3, search: None };
    api.get().list_apis(Some(&query)).await.unwrap();
    api.get().list_apis(NO_PARAMS).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.query(), Some("page=3"));
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn test_fetch_api_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apidoc/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("entry 42"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/apidoc/users"))
        .and(query_param("version", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("users"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, "/");
    let by_number = api.get().fetch_api(42, NO_PARAMS).await.unwrap();
    assert_eq!(by_number.text().await.unwrap(), "entry 42");

    let query = BTreeMap::from([("version", "2")]);
    let by_name = api.get().fetch_api("users", Some(&query)).await.unwrap();
    assert_eq!(by_name.text().await.unwrap(), "users");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_relaxer_posts_to_origin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/relax/relaxer/send"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"x":"y"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("sent"))
        .expect(1)
        .mount(&server)
        .await;

    // the path prefix of the base URL must not leak into the relaxer URL
    let api = api_for(&server, "/api/v1/");
    let response = api.post().relaxer(&serde_json::json!({ "x": "y" })).await.unwrap();
    assert_eq!(response.text().await.unwrap(), "sent");
}

#[tokio::test]
async fn test_relaxer_uses_explicit_origin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/relax/relaxer/send"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new("http://127.0.0.1:9/docs/").with_origin(server.uri());
    let api = RelaxApi::new(&config).unwrap();
    let response = api.post().relaxer(&BTreeMap::from([("note", "hi")])).await.unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_error_status_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apidoc/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server, "/");
    let missing = api.get().fetch_api("missing", NO_PARAMS).await.unwrap();
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.text().await.unwrap(), "not found");

    let failed = api.post().relaxer(&()).await.unwrap();
    assert_eq!(failed.status(), 500);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // bind and immediately release a port so nothing listens on it
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

    let api = RelaxApi::new(&ClientConfig::new(format!("http://127.0.0.1:{port}/"))).unwrap();
    let result = api.get().list_apis(NO_PARAMS).await;
    assert!(matches!(result, Err(RequestError::Transport(ref err)) if err.is_connect()));
}

#[tokio::test]
async fn test_concurrent_calls_do_not_interfere() {
    let server = MockServer::start().await;
    for page in 1..=4 {
        Mock::given(method("GET"))
            .and(path("/apidoc"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("page {page}")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = Arc::new(api_for(&server, "/"));
    let calls = (1..=4).map(|page| {
        let api = Arc::clone(&api);
        async move {
            let query = PageQuery { page, search: None };
            let response = api.get().list_apis(Some(&query)).await.unwrap();
            (page, response.text().await.unwrap())
        }
    });
    for (page, body) in join_all(calls).await {
        assert_eq!(body, format!("page {page}"));
    }
}

#[tokio::test]
async fn test_fetch_api_id_is_not_escaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    let api = api_for(&server, "/");
    api.get().fetch_api("group/7", NO_PARAMS).await.unwrap();
    api.get().fetch_api("a%20b", NO_PARAMS).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/apidoc/group/7");
    assert_eq!(requests[1].url.path(), "/apidoc/a%20b");
}

#[test]
fn test_fetch_url_is_root_plus_id() {
    let client = HTTPClient::new(&ClientConfig::new("https://example.com/")).unwrap();
    let nested = FetchApiRequest::<()>::new(&ApiId::from("group/7"), None);
    assert_eq!(nested.request_url(&client).unwrap().as_str(), "https://example.com/apidoc/group/7");

    let encoded = FetchApiRequest::<()>::new(&ApiId::from("a%20b"), None);
    assert_eq!(encoded.request_url(&client).unwrap().as_str(), "https://example.com/apidoc/a%20b");

    let numeric = FetchApiRequest::<()>::new(&ApiId::from(-7_i64), None);
    assert_eq!(numeric.request_url(&client).unwrap().as_str(), "https://example.com/apidoc/-7");
}

#[test]
fn test_relaxer_url_ignores_root() {
    let client = HTTPClient::new(&ClientConfig::new("https://example.com/relax/docs/")).unwrap();
    let request = RelaxerRequest { params: &() };
    let url = request.request_url(&client).unwrap();
    assert_eq!(url.as_str(), "https://example.com/relax/relaxer/send");
}

#[test]
fn test_client_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelaxApi>();
}
