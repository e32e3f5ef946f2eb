//! End-to-end tests of the reqwest adapter against a local mock server.

use serde_json::json;
use slimhttp::{Client, Headers, ReqwestTransport, TransportConfig};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let transport = ReqwestTransport::new(TransportConfig::new().base_url(server.uri())).unwrap();
    Client::builder()
        .transport(Arc::new(transport))
        .build()
        .unwrap()
}

#[tokio::test]
async fn post_reaches_the_wire_with_json_body_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/widgets"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"foo": "bar"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post("/widgets", &json!({"foo": "bar"}), Headers::new())
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.json().unwrap()["id"], 1);
}

#[tokio::test]
async fn get_forwards_caller_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .and(header("authorization", "Basic dGVzdDp0ZXN0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let headers = Headers::from_iter([("Authorization", "Basic dGVzdDp0ZXN0")]);
    let response = client.get("/widgets/1", headers).await.unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/widgets/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.delete("/widgets/9", Headers::new()).await.unwrap();

    assert_eq!(response.status_code, 404);
    assert!(response.is_client_error());
}
