//! Router tests: every route is driven through `oneshot` against a mocked image API.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use graphic_designer_tool::{web, ImageGenerator, OpenAiClient};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use std::sync::Arc;
use tower::ServiceExt;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

fn app_for(server: &MockServer) -> Router {
    let provider = OpenAiClient::new(server.base_url(), "sk-web").unwrap();
    let generator = ImageGenerator::new(provider, "dall-e-3", "standard", 1, "1024x1024").unwrap();
    web::create_router(Arc::new(generator))
}

fn mock_successful_generation(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/images/generations");
        then.status(200).json_body(serde_json::json!({
            "data": [{"url": server.url("/files/visual.png")}]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/files/visual.png");
        then.status(200).body(PNG);
    });
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = MockServer::start();
    let response = app_for(&server)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn index_renders_the_form() {
    let server = MockServer::start();
    let response = app_for(&server)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Graphic designer tool"));
    assert!(html.contains("Visual description"));
    assert!(html.contains("name=\"description\""));
}

#[tokio::test]
async fn form_submission_embeds_the_generated_visual() {
    let server = MockServer::start();
    mock_successful_generation(&server);

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("description=A+geometric+owl+logo"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Generated visual"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("A geometric owl logo"));
}

#[tokio::test]
async fn form_submission_shows_upstream_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/images/generations");
        then.status(500).json_body(serde_json::json!({
            "error": {"message": "The server had an error while processing your request."}
        }));
    });

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("description=anything"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_string(response).await;
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("The server had an error while processing your request."));
}

#[tokio::test]
async fn api_returns_raw_image_bytes() {
    let server = MockServer::start();
    mock_successful_generation(&server);

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"description": "A futuristic cityscape"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], PNG);
}

#[tokio::test]
async fn api_rejects_blank_description_without_calling_upstream() {
    let server = MockServer::start();
    let generation = server.mock(|when, then| {
        when.method(POST).path("/images/generations");
        then.status(200).json_body(serde_json::json!({"data": []}));
    });

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"description": "  "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Visual description cannot be empty");
    generation.assert_hits(0);
}
