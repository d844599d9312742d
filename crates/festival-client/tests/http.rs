//! Wire-level tests against a mock backend.

use festival_client::{ApiClient, ApiConfig, ApiError, RequestBody};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(format!("{}/api/", server.uri())))
}

#[tokio::test]
async fn inbound_keys_are_camel_cased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_pages": 3,
            "results": [{"venue_name": "Main hall", "created_at": "2024-01-01"}]
        })))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .get("/shows")
        .await
        .expect("request succeeds")
        .expect("body present");
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["results"][0]["venueName"], "Main hall");
    assert_eq!(body["results"][0]["createdAt"], "2024-01-01");
}

#[tokio::test]
async fn outbound_json_keys_are_snake_cased() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(body_json(json!({"show_id": "7", "content": "Bravo"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .post(
            "comments",
            RequestBody::Json(json!({"showId": "7", "content": "Bravo"})),
            Some(201),
        )
        .await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn verbatim_bodies_bypass_case_conversion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shows/7/reserve"))
        .and(body_json(json!({"fullName": "Amal"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .post(
            "shows/7/reserve",
            RequestBody::Verbatim(json!({"fullName": "Amal"})),
            Some(201),
        )
        .await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn multipart_bodies_replace_the_configured_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/media"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // A JSON content-type default must not survive a multipart send;
    // the other defaults still apply.
    let client = ApiClient::new(
        ApiConfig::new(format!("{}/api", server.uri()))
            .with_header("content-type", "application/json")
            .with_header("x-api-key", "secret"),
    );
    let form = reqwest::multipart::Form::new().text("caption", "Opening night");
    let outcome = client
        .post("media", RequestBody::Multipart(form), Some(201))
        .await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn text_bodies_are_sent_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(header("content-type", "text/plain"))
        .and(body_string("snake_case stays snake_case"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .post(
            "feedback",
            RequestBody::Text("snake_case stays snake_case".to_string()),
            Some(201),
        )
        .await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn non_2xx_yields_the_structured_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/festivals/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get("festivals/99")
        .await
        .expect_err("must fail");
    match error {
        ApiError::Http {
            status,
            message,
            payload,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found");
            assert_eq!(payload, Some(json!({"message": "Not found"})));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn message_falls_back_to_the_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/festivals"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get("festivals")
        .await
        .expect_err("must fail");
    assert_eq!(error.status(), Some(403));
    assert!(error.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn empty_204_response_is_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shows/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client_for(&server).get("shows/1").await.expect("no error");
    assert_eq!(body, None);
}

#[tokio::test]
async fn plain_text_responses_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let body = client_for(&server).get("health").await.expect("no error");
    assert_eq!(body, Some(serde_json::Value::String("ok".to_string())));
}

#[tokio::test]
async fn base_and_path_join_with_a_single_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/festivals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    // Trailing slash on the base, leading slash on the path.
    let slashed = ApiClient::new(ApiConfig::new(format!("{}/api/", server.uri())));
    assert!(slashed.get("/festivals").await.is_ok());

    // Neither side carries a slash.
    let bare = ApiClient::new(ApiConfig::new(format!("{}/api", server.uri())));
    assert!(bare.get("festivals").await.is_ok());
}

#[tokio::test]
async fn transient_failures_are_retried_up_to_the_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/festivals"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3) // initial attempt + two retries
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get("festivals")
        .await
        .expect_err("still failing after retries");
    assert_eq!(error.status(), Some(500));
}
