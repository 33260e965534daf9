//! Mail relay integration tests.
//!
//! Drive the full application router with `tower::ServiceExt::oneshot`,
//! with a locally bound axum stub standing in for the Resend API so the
//! tests can observe exactly which sends were attempted.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;

use island_time_tactical::config::{ResendConfig, SiteConfig};
use island_time_tactical::state::AppState;

const BUSINESS_EMAIL: &str = "paul@islandtimetactical.com";

/// Stub email provider recording every send request it receives.
#[derive(Clone)]
struct ProviderStub {
    requests: Arc<Mutex<Vec<Value>>>,
    fail: bool,
}

async fn record_send(
    State(stub): State<ProviderStub>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut requests = stub.requests.lock().await;
    requests.push(body);
    let count = requests.len();
    drop(requests);

    if stub.fail {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "provider unavailable"})),
        )
    } else {
        (StatusCode::OK, Json(json!({"id": format!("msg_{count}")})))
    }
}

/// Bind the stub provider on an ephemeral port and return its base URL
/// plus the shared request log.
async fn spawn_provider(fail: bool) -> (String, Arc<Mutex<Vec<Value>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let stub = ProviderStub {
        requests: Arc::clone(&requests),
        fail,
    };

    let app = Router::new()
        .route("/emails", post(record_send))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), requests)
}

/// Application under test, pointed at the stub provider.
fn test_app(api_base: &str) -> Router {
    let config = SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        resend: ResendConfig {
            api_key: SecretString::from("re_test_key"),
            api_base: api_base.to_string(),
            from_address: "Island Time Tactical <onboarding@resend.dev>".to_string(),
            business_email: BUSINESS_EMAIL.to_string(),
        },
        sentry_dsn: None,
    };
    let state = AppState::new(config).unwrap();
    island_time_tactical::app(state)
}

async fn post_submission(app: Router, payload: &Value) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/send-contact-email")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body(response: Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn contact_submission_sends_both_emails() {
    let (base, requests) = spawn_provider(false).await;
    let app = test_app(&base);

    let response = post_submission(
        app,
        &json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi",
            "type": "contact"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["businessEmailId"], "msg_1");
    assert_eq!(body["customerEmailId"], "msg_2");

    let sent = requests.lock().await;
    assert_eq!(sent.len(), 2);

    // Business notification first, reply-to set to the submitter
    assert_eq!(sent[0]["to"][0], BUSINESS_EMAIL);
    assert_eq!(sent[0]["reply_to"], "jane@x.com");
    assert_eq!(
        sent[0]["subject"],
        "New Contact Form Submission - Island Time Tactical"
    );
    let business_html = sent[0]["html"].as_str().unwrap();
    assert!(business_html.contains("Jane"));
    assert!(!business_html.contains("Product:"));
    assert!(!business_html.contains("Phone:"));

    // Customer confirmation second, no reply-to
    assert_eq!(sent[1]["to"][0], "jane@x.com");
    assert!(sent[1].get("reply_to").is_none());
    assert_eq!(
        sent[1]["subject"],
        "We received your message - Island Time Tactical"
    );
    assert!(sent[1]["html"].as_str().unwrap().contains("(713) 553-7419"));
}

#[tokio::test]
async fn inquiry_submission_names_the_product_in_the_subject() {
    let (base, requests) = spawn_provider(false).await;
    let app = test_app(&base);

    let response = post_submission(
        app,
        &json!({
            "name": "Jane",
            "email": "jane@x.com",
            "phone": "(713) 555-0100",
            "message": "Is this in stock?",
            "productName": "AR-15 Complete Rifle",
            "type": "inquiry"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let sent = requests.lock().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["subject"], "Product Inquiry: AR-15 Complete Rifle");
    let business_html = sent[0]["html"].as_str().unwrap();
    assert!(business_html.contains("AR-15 Complete Rifle"));
    assert!(business_html.contains("(713) 555-0100"));
    assert!(
        sent[1]["html"]
            .as_str()
            .unwrap()
            .contains("Thank you for your inquiry, Jane!")
    );
}

#[tokio::test]
async fn first_send_failure_short_circuits_the_second() {
    let (base, requests) = spawn_provider(true).await;
    let app = test_app(&base);

    let response = post_submission(
        app,
        &json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi",
            "type": "contact"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("500"));

    // The customer confirmation was never attempted
    assert_eq!(requests.lock().await.len(), 1);
}

#[tokio::test]
async fn invalid_fields_block_any_provider_call() {
    let (base, requests) = spawn_provider(false).await;

    let payloads = [
        json!({"name": "", "email": "jane@x.com", "message": "Hi", "type": "contact"}),
        json!({"name": "Jane", "email": "", "message": "Hi", "type": "contact"}),
        json!({"name": "Jane", "email": "jane@x.com", "message": "", "type": "contact"}),
        json!({"name": "Jane", "email": "jane-at-x", "message": "Hi", "type": "contact"}),
        json!({"name": "Jane", "email": "jane@x.com", "message": "Hi", "type": "inquiry"}),
    ];

    for payload in payloads {
        let response = post_submission(test_app(&base), &payload).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "expected error for {payload}"
        );
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    assert!(requests.lock().await.is_empty());
}

#[tokio::test]
async fn malformed_json_is_an_error_without_provider_calls() {
    let (base, requests) = spawn_provider(false).await;
    let app = test_app(&base);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/send-contact-email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
    assert!(requests.lock().await.is_empty());
}

#[tokio::test]
async fn options_preflight_always_returns_cors_headers() {
    let (base, _requests) = spawn_provider(false).await;

    // Browser-style preflight
    let response = test_app(&base)
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/send-contact-email")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );

    // Bare OPTIONS with no preflight headers still answers immediately
    let response = test_app(&base)
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/send-contact-email")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn landing_page_renders_sections() {
    let (base, _requests) = spawn_provider(false).await;
    let app = test_app(&base);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("Featured"));
    assert!(html.contains("AR-15 Complete Rifle"));
    assert!(html.contains("Licensed &amp; Insured") || html.contains("Licensed & Insured"));
    assert!(html.contains("contact-form"));
    assert!(html.contains("(713) 553-7419"));
}

#[tokio::test]
async fn health_endpoint_is_alive() {
    let (base, _requests) = spawn_provider(false).await;
    let app = test_app(&base);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.as_ref(), b"ok");
}

