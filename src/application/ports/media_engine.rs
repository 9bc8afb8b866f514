//! Media Engine Port - 生成媒体供应商抽象
//!
//! 定义图像/视频生成与状态轮询的抽象接口，具体实现在
//! infrastructure/adapters 层（HTTP 客户端与测试用 Fake）

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::generation::{DataUri, TaskId, TaskStatus};

/// 供应商调用错误
///
/// NetworkError/Timeout/ServiceError 属传输层失败（对外 502）；
/// InvalidResponse 表示调用成功但响应形状违反契约（对外 500）
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 图像生成任务（已套用默认值并通过验证）
#[derive(Debug, Clone)]
pub struct ImageTask {
    /// 本端生成的任务标识，每次提交唯一
    pub task_id: TaskId,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
    pub number_results: u32,
    pub output_type: String,
    /// 可选种子图
    pub seed: Option<SeedImage>,
}

/// 种子图及重绘强度
#[derive(Debug, Clone)]
pub struct SeedImage {
    pub image: DataUri,
    pub strength: f64,
}

/// 视频生成任务（已套用默认值并通过验证）
#[derive(Debug, Clone)]
pub struct VideoTask {
    pub task_id: TaskId,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
    /// 时长（秒）
    pub duration: u32,
    pub fps: u32,
    pub number_results: u32,
}

/// 图像生成结果（同步路径）
#[derive(Debug, Clone)]
pub struct ImageOutput {
    pub image_url: String,
    /// 供应商原始响应，原样透传给调用方
    pub raw: Value,
}

/// 视频任务回执（异步路径）
///
/// task_id 取自供应商回显项，设计上不与提交时生成的标识断言相等
#[derive(Debug, Clone)]
pub struct VideoSubmission {
    pub task_id: TaskId,
    pub raw: Value,
}

/// 一次轮询的状态快照
///
/// 每次轮询重新计算，本端不保存任何任务状态
#[derive(Debug, Clone)]
pub struct PollOutcome {
    pub status: TaskStatus,
    pub video_url: Option<String>,
    pub cost: Option<f64>,
    pub raw: Value,
}

/// Media Engine Port
///
/// 生成媒体供应商的抽象接口。每个方法对应一次出站调用，
/// 无内部重试、退避或状态保持。
#[async_trait]
pub trait MediaEnginePort: Send + Sync {
    /// 提交图像生成任务并同步取回结果 URL
    async fn generate_image(&self, task: ImageTask) -> Result<ImageOutput, MediaError>;

    /// 提交视频生成任务，返回供应商回显的任务标识
    async fn submit_video(&self, task: VideoTask) -> Result<VideoSubmission, MediaError>;

    /// 按任务标识轮询一次当前状态
    async fn poll_task(&self, task_id: &TaskId) -> Result<PollOutcome, MediaError>;
}
