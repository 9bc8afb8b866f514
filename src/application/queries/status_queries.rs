//! Status Queries - 任务状态查询
//!
//! 每次查询对应一次 getResponse 出站调用，轮询节奏完全由浏览器控制

use serde_json::Value;

use crate::domain::generation::TaskStatus;

/// 轮询任务状态查询
#[derive(Debug, Clone)]
pub struct PollTaskStatusQuery {
    /// 供应商回显的任务标识，原样透传
    pub task_id: String,
}

/// 轮询任务状态响应
#[derive(Debug, Clone)]
pub struct PollTaskStatusResponse {
    pub status: TaskStatus,
    pub video_url: Option<String>,
    pub cost: Option<f64>,
    pub raw: Value,
}
