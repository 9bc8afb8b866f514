//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态。
//! 除静态配置外无进程级状态，任务生命周期完全由供应商维护。

use std::sync::Arc;

use crate::application::{
    GenerateImageHandler, MediaEnginePort, PollTaskStatusHandler, SubmitVideoHandler,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub media_engine: Arc<dyn MediaEnginePort>,

    // ========== Command Handlers ==========
    pub generate_image_handler: GenerateImageHandler,
    pub submit_video_handler: SubmitVideoHandler,

    // ========== Query Handlers ==========
    pub poll_task_status_handler: PollTaskStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(media_engine: Arc<dyn MediaEnginePort>) -> Self {
        Self {
            media_engine: media_engine.clone(),
            generate_image_handler: GenerateImageHandler::new(media_engine.clone()),
            submit_video_handler: SubmitVideoHandler::new(media_engine.clone()),
            poll_task_status_handler: PollTaskStatusHandler::new(media_engine),
        }
    }
}
