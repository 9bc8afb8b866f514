//! Generate Commands - 生成任务提交命令
//!
//! 命令字段保持浏览器表单的原始文本形态，默认值与数值解析
//! 统一在 handler 中处理

use serde_json::Value;

use crate::domain::generation::TaskId;

/// 提交图像生成命令
#[derive(Debug, Clone, Default)]
pub struct GenerateImageCommand {
    pub prompt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub model: Option<String>,
    pub number_results: Option<String>,
    pub output_type: Option<String>,
    /// 上传的种子图（可选）
    pub seed_image: Option<SeedUpload>,
    pub strength: Option<String>,
}

/// 上传的种子图原始内容
#[derive(Debug, Clone)]
pub struct SeedUpload {
    /// 浏览器标注的 MIME 类型
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// 图像生成响应
#[derive(Debug, Clone)]
pub struct GenerateImageResponse {
    pub task_id: TaskId,
    pub image_url: String,
    pub raw: Value,
}

/// 提交视频生成命令
#[derive(Debug, Clone, Default)]
pub struct SubmitVideoCommand {
    pub prompt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub model: Option<String>,
    pub duration: Option<String>,
    pub fps: Option<String>,
    pub number_results: Option<String>,
}

/// 视频提交响应
///
/// task_id 为供应商回显的任务标识，供后续轮询使用
#[derive(Debug, Clone)]
pub struct SubmitVideoResponse {
    pub task_id: TaskId,
    pub raw: Value,
}
