//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                    GET   健康检查
//! - /api/image/infer             POST  提交图像生成（multipart，同步返回结果 URL）
//! - /api/video/infer             POST  提交视频生成（表单，返回任务标识）
//! - /api/video/status/:task_uuid GET   轮询视频任务状态

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/image", image_routes())
        .nest("/video", video_routes())
}

/// Image 路由
fn image_routes() -> Router<Arc<AppState>> {
    Router::new().route("/infer", post(handlers::infer_image))
}

/// Video 路由
fn video_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/infer", post(handlers::infer_video))
        .route("/status/:task_uuid", get(handlers::video_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::application::ports::MediaError;
    use crate::infrastructure::adapters::provider::FakeMediaClient;

    fn test_app(client: FakeMediaClient) -> Router {
        create_routes().with_state(Arc::new(AppState::new(Arc::new(client))))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app(FakeMediaClient::with_defaults());
        let response = app
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_video_submit_returns_task_uuid() {
        let app = test_app(FakeMediaClient::with_defaults());
        let request = Request::builder()
            .method("POST")
            .uri("/api/video/infer")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("duration=5&fps=24"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert!(!body["taskUUID"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_poll_success() {
        let app = test_app(FakeMediaClient::with_defaults());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/video/status/some-task")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["status"], "success");
        assert!(body["videoURL"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_status_poll_timeout_is_structured_502() {
        // 传输超时必须以结构化错误返回，而不是 panic 或空响应
        let app = test_app(FakeMediaClient::failing(MediaError::Timeout));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/video/status/some-task")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_numeric_form_field_is_400() {
        let app = test_app(FakeMediaClient::with_defaults());
        let request = Request::builder()
            .method("POST")
            .uri("/api/video/infer")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("duration=five"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
