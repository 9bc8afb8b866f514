//! Fake Media Client - 用于测试的供应商客户端
//!
//! 不发起网络调用，按脚本返回固定结果或固定错误

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{
    ImageOutput, ImageTask, MediaEnginePort, MediaError, PollOutcome, VideoSubmission, VideoTask,
};
use crate::domain::generation::{TaskId, TaskStatus};

/// Fake Media Client 配置
#[derive(Debug, Clone)]
pub struct FakeMediaClientConfig {
    /// 图像路径返回的固定 URL
    pub image_url: String,
    /// 轮询返回的固定状态
    pub poll_status: TaskStatus,
    /// 轮询返回的固定结果 URL
    pub video_url: Option<String>,
    /// 轮询返回的固定成本
    pub cost: Option<f64>,
    /// 设置后所有调用返回该错误
    pub failure: Option<MediaError>,
}

impl Default for FakeMediaClientConfig {
    fn default() -> Self {
        Self {
            image_url: "https://media.example/fake-image.jpg".to_string(),
            poll_status: TaskStatus::Success,
            video_url: Some("https://media.example/fake-video.mp4".to_string()),
            cost: Some(0.25),
            failure: None,
        }
    }
}

/// Fake Media Client
///
/// 提交时回显本端生成的任务标识，轮询时返回配置的固定快照
pub struct FakeMediaClient {
    config: FakeMediaClientConfig,
}

impl FakeMediaClient {
    pub fn new(config: FakeMediaClientConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建（全部调用成功）
    pub fn with_defaults() -> Self {
        Self::new(FakeMediaClientConfig::default())
    }

    /// 创建所有调用都失败的客户端
    pub fn failing(error: MediaError) -> Self {
        Self::new(FakeMediaClientConfig {
            failure: Some(error),
            ..Default::default()
        })
    }

    fn scripted_failure(&self) -> Result<(), MediaError> {
        match &self.config.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MediaEnginePort for FakeMediaClient {
    async fn generate_image(&self, task: ImageTask) -> Result<ImageOutput, MediaError> {
        self.scripted_failure()?;
        Ok(ImageOutput {
            image_url: self.config.image_url.clone(),
            raw: json!({
                "data": [{
                    "taskType": "imageInference",
                    "taskUUID": task.task_id.as_str(),
                    "imageURL": self.config.image_url,
                }]
            }),
        })
    }

    async fn submit_video(&self, task: VideoTask) -> Result<VideoSubmission, MediaError> {
        self.scripted_failure()?;
        Ok(VideoSubmission {
            raw: json!({
                "data": [{
                    "taskType": "videoInference",
                    "taskUUID": task.task_id.as_str(),
                }]
            }),
            task_id: task.task_id,
        })
    }

    async fn poll_task(&self, task_id: &TaskId) -> Result<PollOutcome, MediaError> {
        self.scripted_failure()?;
        Ok(PollOutcome {
            status: self.config.poll_status.clone(),
            video_url: self.config.video_url.clone(),
            cost: self.config.cost,
            raw: json!({
                "data": [{
                    "taskType": "videoInference",
                    "taskUUID": task_id.as_str(),
                    "status": self.config.poll_status.as_str(),
                    "videoURL": self.config.video_url,
                    "cost": self.config.cost,
                }]
            }),
        })
    }
}
