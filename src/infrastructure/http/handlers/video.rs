//! Video HTTP Handlers
//!
//! 视频生成为异步路径：提交返回任务标识，浏览器按自己的节奏
//! 调用状态接口轮询，直到 success 或错误状态。

use axum::{
    extract::{Path, State},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{PollTaskStatusQuery, SubmitVideoCommand};
use crate::infrastructure::http::dto::{TaskStatusResponse, VideoInferResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 视频生成表单（全部字段可缺省）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInferForm {
    pub prompt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub model: Option<String>,
    pub duration: Option<String>,
    pub fps: Option<String>,
    pub number_results: Option<String>,
}

/// 提交视频生成任务
pub async fn infer_video(
    State(state): State<Arc<AppState>>,
    Form(form): Form<VideoInferForm>,
) -> Result<Json<VideoInferResponse>, ApiError> {
    let cmd = SubmitVideoCommand {
        prompt: form.prompt,
        width: form.width,
        height: form.height,
        model: form.model,
        duration: form.duration,
        fps: form.fps,
        number_results: form.number_results,
    };

    let result = state.submit_video_handler.handle(cmd).await?;

    Ok(Json(VideoInferResponse {
        ok: true,
        task_uuid: result.task_id.to_string(),
        raw: result.raw,
    }))
}

/// 轮询视频任务状态
pub async fn video_status(
    State(state): State<Arc<AppState>>,
    Path(task_uuid): Path<String>,
) -> Result<Json<TaskStatusResponse>, ApiError> {
    let result = state
        .poll_task_status_handler
        .handle(PollTaskStatusQuery { task_id: task_uuid })
        .await?;

    Ok(Json(TaskStatusResponse {
        ok: true,
        status: result.status.as_str().to_string(),
        video_url: result.video_url,
        cost: result.cost,
        raw: result.raw,
    }))
}
