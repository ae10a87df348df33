use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Extension, Router,
};
use booking_server::middleware::request_id::{request_id, RequestId};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    Router::new()
        .route("/test", get(|| async { "ok" }))
        .route(
            "/echo",
            get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        )
        .layer(axum::middleware::from_fn(request_id))
}

#[tokio::test]
async fn request_id_header_is_minted() {
    let response = app()
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn client_request_id_is_kept() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-request-id", "client-req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-req-123");
}

#[tokio::test]
async fn correlation_id_is_used_as_fallback() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-correlation-id", "corr-req-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "corr-req-456");
}

#[tokio::test]
async fn handlers_see_the_same_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"trace-me");
}
