//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle through the router, both for proxied
//! HTTP requests and for raw event invocations.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use item_store::{api::create_router, ApiEvent, ApiResponse, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::in_memory())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()["content-type"],
        "application/json",
        "every response is JSON"
    );
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn invoke(app: &Router, event: &ApiEvent) -> ApiResponse {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/invoke")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(event).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn invoke_document(app: &Router, document: String) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/invoke")
                .header("content-type", "application/json")
                .body(Body::from(document))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

fn decoded(response: &ApiResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

// == Proxied Requests ==

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a1","price":10,"name":"widget"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Put item a1"));

    let (status, body) = send(&app, "GET", "/items/a1", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Item": {"id": "a1", "price": 10, "name": "widget"}}));
}

#[tokio::test]
async fn test_put_overwrites_existing_item() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a1","price":10,"name":"widget"}"#),
    )
    .await;
    send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a1","price":12,"name":"gadget"}"#),
    )
    .await;

    let (_, body) = send(&app, "GET", "/items/a1", Body::empty()).await;
    assert_eq!(body, json!({"Item": {"id": "a1", "price": 12, "name": "gadget"}}));

    let (_, body) = send(&app, "GET", "/items", Body::empty()).await;
    assert_eq!(body["Count"], 1);
}

#[tokio::test]
async fn test_delete_then_get_is_empty() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a1","price":10,"name":"widget"}"#),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/items/a1", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Deleted item a1"));

    let (status, body) = send(&app, "GET", "/items/a1", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_list_contains_all_items() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a1","price":1,"name":"one"}"#),
    )
    .await;
    send(
        &app,
        "PUT",
        "/items",
        Body::from(r#"{"id":"a2","price":2,"name":"two"}"#),
    )
    .await;

    let (status, body) = send(&app, "GET", "/items", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Count"], 2);

    let items = body["Items"].as_array().unwrap();
    assert!(items.contains(&json!({"id": "a1", "price": 1, "name": "one"})));
    assert!(items.contains(&json!({"id": "a2", "price": 2, "name": "two"})));
}

#[tokio::test]
async fn test_unsupported_route_is_400() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/items",
        Body::from(r#"{"id":"a1"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body
        .as_str()
        .unwrap()
        .contains(r#"Unsupported route: "POST /items""#));
}

#[tokio::test]
async fn test_unparseable_body_is_400_and_not_stored() {
    let app = create_test_app();

    let (status, body) = send(&app, "PUT", "/items", Body::from("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.as_str().unwrap().starts_with("Invalid request body"));

    let (_, body) = send(&app, "GET", "/items", Body::empty()).await;
    assert_eq!(body["Count"], 0);
}

#[tokio::test]
async fn test_binary_body_is_base64_wrapped() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/items",
        Body::from(vec![0xffu8, 0x00, 0xfe]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.as_str().unwrap().starts_with("Body is not valid UTF-8"));
}

// == Raw Event Invocations ==

#[tokio::test]
async fn test_invoke_base64_put_matches_plain_put() {
    let app = create_test_app();

    let event = ApiEvent {
        http_method: "PUT".to_string(),
        resource: "/items".to_string(),
        path_parameters: None,
        body: Some(STANDARD.encode(r#"{"id":"b1","price":5,"name":"x"}"#)),
        is_base64_encoded: true,
    };
    let response = invoke(&app, &event).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(decoded(&response), json!("Put item b1"));

    let event = ApiEvent::new("GET", "/items/{id}").with_path_parameter("id", "b1");
    let response = invoke(&app, &event).await;
    assert_eq!(decoded(&response), json!({"Item": {"id": "b1", "price": 5, "name": "x"}}));
}

#[tokio::test]
async fn test_invoke_gateway_event_document() {
    let app = create_test_app();

    let document = json!({
        "httpMethod": "DELETE",
        "resource": "/items/{id}",
        "path": "/items/gone",
        "pathParameters": {"id": "gone"},
        "body": null,
        "isBase64Encoded": false
    });
    let envelope = invoke_document(&app, document.to_string()).await;
    assert_eq!(envelope["statusCode"], 200);
    assert_eq!(envelope["headers"]["Content-Type"], "application/json");
    assert_eq!(envelope["body"], "\"Deleted item gone\"");
}

#[tokio::test]
async fn test_invoke_unsupported_route_envelope() {
    let app = create_test_app();

    let response = invoke(&app, &ApiEvent::new("POST", "/items")).await;
    assert_eq!(response.status_code, 400);
    assert_eq!(response.headers["Content-Type"], "application/json");
    assert_eq!(decoded(&response), json!("Unsupported route: \"POST /items\""));
}

#[tokio::test]
async fn test_invoke_empty_event_is_400_envelope() {
    let app = create_test_app();

    let envelope = invoke_document(&app, "{}".to_string()).await;
    assert_eq!(envelope["statusCode"], 400);
    assert_eq!(envelope["headers"]["Content-Type"], "application/json");
    assert_eq!(envelope["body"], r#""Unsupported route: \" \"""#);

    let envelope = invoke_document(&app, r#"{"httpMethod":"GET"}"#.to_string()).await;
    assert_eq!(envelope["statusCode"], 400);
    assert_eq!(envelope["body"], r#""Unsupported route: \"GET \"""#);
}

#[tokio::test]
async fn test_invoke_null_fields_are_absent() {
    let app = create_test_app();

    let document = json!({
        "httpMethod": "GET",
        "resource": "/items",
        "pathParameters": null,
        "body": null,
        "isBase64Encoded": null
    });
    let envelope = invoke_document(&app, document.to_string()).await;
    assert_eq!(envelope["statusCode"], 200);
    assert_eq!(envelope["body"], r#"{"Items":[],"Count":0,"ScannedCount":0}"#);
}

#[tokio::test]
async fn test_invoke_unparseable_event_is_400_envelope() {
    let app = create_test_app();

    let envelope = invoke_document(&app, "not an event".to_string()).await;
    assert_eq!(envelope["statusCode"], 400);
    assert_eq!(envelope["headers"]["Content-Type"], "application/json");

    let message: String = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
    assert!(message.starts_with("Invalid event: "));
}

#[tokio::test]
async fn test_invoke_lenient_base64_put() {
    let app = create_test_app();

    // `{"id":"c1"}` is 11 bytes, so its standard encoding ends in one `=`.
    let padded = STANDARD.encode(r#"{"id":"c1"}"#);
    assert!(padded.ends_with('='));

    let unpadded = ApiEvent {
        http_method: "PUT".to_string(),
        resource: "/items".to_string(),
        path_parameters: None,
        body: Some(padded.trim_end_matches('=').to_string()),
        is_base64_encoded: true,
    };
    let response = invoke(&app, &unpadded).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(decoded(&response), json!("Put item c1"));

    let encoded = STANDARD.encode(r#"{"id":"c2","price":7,"name":"wrapped body"}"#);
    let wrapped = encoded
        .as_bytes()
        .chunks(20)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\r\n");
    let event = ApiEvent {
        body: Some(wrapped),
        ..unpadded
    };
    let response = invoke(&app, &event).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(decoded(&response), json!("Put item c2"));

    let (_, body) = send(&app, "GET", "/items", Body::empty()).await;
    assert_eq!(body["Count"], 2);
}

// == Health Endpoint ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body.get("timestamp").is_some());
}
