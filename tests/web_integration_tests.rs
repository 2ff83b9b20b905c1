//! Integration Tests for the Mock Web Server
//!
//! Tests the rendered page for GET requests and rejection of other methods.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use mock_servers::web::create_router;
use tower::ServiceExt;

// == Helper Functions ==

async fn send(request: Request<Body>) -> Response {
    create_router().oneshot(request).await.unwrap()
}

async fn body_to_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// == GET Page Tests ==

#[tokio::test]
async fn test_page_status_and_content_type() {
    let response = send(Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_page_contains_requested_path() {
    let response = send(
        Request::builder()
            .uri("/products/42?color=blue")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let page = body_to_string(response).await;
    assert!(page.contains("<title>Mock Web Server</title>"));
    assert!(page.contains("/products/42?color=blue"));
    assert!(page.contains("Headers received:"));
}

#[tokio::test]
async fn test_one_list_item_per_header() {
    let response = send(
        Request::builder()
            .uri("/headers")
            .header("host", "localhost:8000")
            .header("user-agent", "integration-test")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let page = body_to_string(response).await;
    assert_eq!(page.matches("<li>").count(), 3);
    assert!(page.contains("<li><strong>host:</strong> localhost:8000</li>"));
    assert!(page.contains("<li><strong>user-agent:</strong> integration-test</li>"));
    assert!(page.contains("<li><strong>x-request-id:</strong> abc-123</li>"));

    let host = page.find("host:").unwrap();
    let agent = page.find("user-agent:").unwrap();
    let request_id = page.find("x-request-id:").unwrap();
    assert!(host < agent && agent < request_id);
}

#[tokio::test]
async fn test_no_headers_empty_list() {
    let response = send(Request::builder().uri("/bare").body(Body::empty()).unwrap()).await;

    let page = body_to_string(response).await;
    assert_eq!(page.matches("<li>").count(), 0);
    assert!(page.contains("<ul>"));
}

#[tokio::test]
async fn test_header_markup_is_escaped() {
    let response = send(
        Request::builder()
            .uri("/")
            .header("x-payload", "<img src=x onerror=alert(1)>")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let page = body_to_string(response).await;
    assert!(!page.contains("<img"));
    assert!(page.contains(
        "<li><strong>x-payload:</strong> &lt;img src=x onerror=alert(1)&gt;</li>"
    ));
}

// == Error Response Tests ==

#[tokio::test]
async fn test_post_not_allowed() {
    let response = send(
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-length", "0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET");
}
