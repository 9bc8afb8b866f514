//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。出站调用的每种失败都归入下面四类之一，
//! 不存在未分类的捕获兜底。

use thiserror::Error;

use crate::application::ports::MediaError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（数值字段不可解析等，客户端侧问题）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 传输错误（网络失败、超时或供应商非 2xx）
    #[error("Request failed: {0}")]
    TransportError(String),

    /// 供应商响应形状错误（调用成功但契约被违反）
    #[error("Unexpected response shape: {0}")]
    ProviderShapeError(String),

    /// 内部错误
    #[error("Unexpected error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<MediaError> for ApplicationError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::InvalidResponse(msg) => Self::ProviderShapeError(msg),
            other => Self::TransportError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_map_to_transport() {
        let err = ApplicationError::from(MediaError::Timeout);
        assert!(matches!(err, ApplicationError::TransportError(_)));

        let err = ApplicationError::from(MediaError::ServiceError("HTTP 503".to_string()));
        assert!(matches!(err, ApplicationError::TransportError(_)));
    }

    #[test]
    fn test_shape_errors_stay_distinct_from_transport() {
        let err = ApplicationError::from(MediaError::InvalidResponse("no echo".to_string()));
        assert!(matches!(err, ApplicationError::ProviderShapeError(_)));
        assert!(err.to_string().contains("Unexpected response shape"));
    }
}
