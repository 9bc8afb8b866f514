//! HTTP Middleware
//!
//! 请求日志中间件：记录耗时，4xx/5xx 额外落错误日志
//! 注意：业务错误的细节在 ApiError::into_response() 中记录

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求日志中间件
///
/// 出站调用最长阻塞到供应商超时（60s），latency 字段用于定位慢轮询
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms = latency_ms as u64,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms = latency_ms as u64,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms = latency_ms as u64,
            "HTTP request"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/bad", get(|| async { StatusCode::BAD_REQUEST }))
            .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    async fn status_for(path: &str) -> StatusCode {
        let app = create_test_router();
        let request = HttpRequest::builder().uri(path).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_ok_response_through() {
        assert_eq!(status_for("/ok").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_client_error_through() {
        assert_eq!(status_for("/bad").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_passes_server_error_through() {
        assert_eq!(status_for("/boom").await, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
