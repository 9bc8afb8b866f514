//! Generation Context - Value Objects

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use uuid::Uuid;

/// 任务唯一标识
///
/// 提交时由本端生成（UUID v4 文本形式）；轮询时原样接受供应商回显的
/// 标识字符串，不做格式约束。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// 生成新的任务标识（每次调用都是全新的）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("task identifier cannot be empty");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 种子图 Data URI
///
/// 不变量:
/// - payload 是原始字节的标准 base64 编码
/// - 渲染格式固定为 `data:<mime>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    payload: String,
}

impl DataUri {
    /// 未携带 MIME 类型的上传按 PNG 处理
    pub const DEFAULT_MIME: &'static str = "image/png";

    /// 从原始字节构建 Data URI（纯转换，不修改原始内容）
    pub fn from_bytes(mime: Option<&str>, bytes: &[u8]) -> Self {
        let mime = mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(Self::DEFAULT_MIME);
        Self {
            mime: mime.to_string(),
            payload: BASE64.encode(bytes),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// 解码回原始字节
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.payload)
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

/// 归一化任务状态
///
/// 供应商的状态词表是开放的；本端对外只暴露封闭的三值视图，
/// 外加从供应商错误项透传的错误码。每次轮询重新计算，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// 默认态（无匹配结果项或状态未知）
    Pending,
    /// 供应商报告 pending/processing
    Processing,
    /// 生成完成，结果 URL 可用
    Success,
    /// 供应商错误项的状态码
    Error(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Processing => "processing",
            TaskStatus::Success => "success",
            TaskStatus::Error(code) => code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_generate_is_unique() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_task_id_accepts_opaque_string() {
        let id = TaskId::new("X").unwrap();
        assert_eq!(id.as_str(), "X");
        assert_eq!(id.to_string(), "X");
    }

    #[test]
    fn test_task_id_rejects_empty() {
        assert!(TaskId::new("").is_err());
        assert!(TaskId::new("   ").is_err());
    }

    #[test]
    fn test_data_uri_format() {
        let uri = DataUri::from_bytes(Some("image/jpeg"), b"hello");
        assert_eq!(uri.to_string(), "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(uri.mime(), "image/jpeg");
    }

    #[test]
    fn test_data_uri_round_trips_bytes() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let uri = DataUri::from_bytes(Some("image/png"), &bytes);
        assert_eq!(uri.decode().unwrap(), bytes);
    }

    #[test]
    fn test_data_uri_default_mime() {
        let uri = DataUri::from_bytes(None, b"x");
        assert_eq!(uri.mime(), "image/png");

        let uri = DataUri::from_bytes(Some("  "), b"x");
        assert_eq!(uri.mime(), "image/png");
    }

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Pending.as_str(), "pending");
        assert_eq!(TaskStatus::Processing.as_str(), "processing");
        assert_eq!(TaskStatus::Success.as_str(), "success");
        assert_eq!(TaskStatus::Error("invalidApiKey".to_string()).as_str(), "invalidApiKey");
        assert!(TaskStatus::Success.is_success());
        assert!(!TaskStatus::Pending.is_success());
    }
}
