//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的唯一翻译点：
//! - 验证错误 → 400
//! - 传输错误（网络/超时/供应商非 2xx）→ 502
//! - 响应形状错误与内部错误 → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 客户端侧问题（表单字段不可解析等）
    BadRequest(String),
    /// 出站调用在传输层失败
    BadGateway(String),
    /// 供应商契约违反或内部错误
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "Provider request failed");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::TransportError(_) => ApiError::BadGateway(e.to_string()),
            ApplicationError::ProviderShapeError(_) | ApplicationError::InternalError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}
