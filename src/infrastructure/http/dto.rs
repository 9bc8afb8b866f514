//! Data Transfer Objects
//!
//! 对浏览器暴露的响应结构。字段名遵循供应商侧的命名习惯
//! （taskUUID / videoURL），前端轮询逻辑直接消费这些字段。

use serde::Serialize;
use serde_json::Value;

/// 图像生成响应（同步返回结果 URL）
#[derive(Debug, Serialize)]
pub struct ImageInferResponse {
    pub ok: bool,
    #[serde(rename = "taskUUID")]
    pub task_uuid: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub raw: Value,
}

/// 视频提交响应（返回供应商回显的任务标识）
#[derive(Debug, Serialize)]
pub struct VideoInferResponse {
    pub ok: bool,
    #[serde(rename = "taskUUID")]
    pub task_uuid: String,
    pub raw: Value,
}

/// 任务状态响应
///
/// videoURL 与 cost 在未完成时为 null，字段始终出现，
/// 便于前端无条件读取
#[derive(Debug, Serialize)]
pub struct TaskStatusResponse {
    pub ok: bool,
    pub status: String,
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
    pub cost: Option<f64>,
    pub raw: Value,
}
