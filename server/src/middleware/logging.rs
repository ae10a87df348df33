use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

struct ErrorEvent<'a> {
    status: u16,
    method: &'a str,
    uri: &'a str,
    request_id: &'a str,
    latency_ms: u64,
}

/// Logs every 4xx/5xx response with a preview of its body. The body is
/// buffered and handed on unchanged.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let event = ErrorEvent {
        status: status.as_u16(),
        method: &method,
        uri: &uri,
        request_id: &request_id,
        latency_ms: start.elapsed().as_millis() as u64,
    };
    let (mut parts, body) = response.into_parts();
    match buffer_body(body).await {
        Ok((bytes, preview)) => {
            log_error_event(&event, &preview, None);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            log_error_event(&event, "", Some(err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

async fn buffer_body(body: Body) -> Result<(Bytes, String), AxumError> {
    let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES).await?;
    Ok((bytes.clone(), body_preview(&bytes)))
}

fn body_preview(bytes: &[u8]) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

fn log_error_event(event: &ErrorEvent<'_>, body: &str, body_error: Option<AxumError>) {
    let ErrorEvent {
        status,
        method,
        uri,
        request_id,
        latency_ms,
    } = *event;

    if let Some(err) = body_error {
        if status >= 500 {
            tracing::error!(status, method, uri, request_id, latency_ms, error = ?err, "Failed to read error response body");
        } else {
            tracing::warn!(status, method, uri, request_id, latency_ms, error = ?err, "Failed to read error response body");
        }
        return;
    }

    if status >= 500 {
        tracing::error!(status, method, uri, request_id, latency_ms, body, "Request completed with error status");
    } else {
        tracing::warn!(status, method, uri, request_id, latency_ms, body, "Request completed with error status");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn long_bodies_are_truncated_in_preview() {
        let body = vec![b'x'; MAX_LOGGED_BODY_BYTES + 10];
        let preview = body_preview(&body);
        assert!(preview.ends_with(&format!("(truncated, {} bytes total)", body.len())));
        assert_eq!(body_preview(b"short"), "short");
    }

    #[tokio::test]
    async fn error_bodies_pass_through_unchanged() {
        let app = Router::new()
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nothing here") }))
            .layer(axum::middleware::from_fn(log_error_responses));

        let response = app
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"nothing here");
    }
}
