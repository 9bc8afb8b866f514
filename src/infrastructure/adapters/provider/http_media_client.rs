//! HTTP Media Client - 调用外部生成媒体供应商
//!
//! 实现 MediaEnginePort trait，通过 HTTPS 调用供应商 API
//!
//! 供应商 API:
//! POST https://api.runware.ai/v1
//! Request: `[{"taskType":"authentication","apiKey":"..."}, {任务记录}]`  (JSON)
//! Response: `{"data":[...], "errors":[...]}`

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::wire::{self, TaskRecord};
use crate::application::ports::{
    ImageOutput, ImageTask, MediaEnginePort, MediaError, PollOutcome, VideoSubmission, VideoTask,
};
use crate::domain::generation::TaskId;

/// HTTP Media 客户端配置
#[derive(Debug, Clone)]
pub struct HttpMediaClientConfig {
    /// 供应商 API 端点（单一固定 URL）
    pub url: String,
    /// 供应商 API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpMediaClientConfig {
    fn default() -> Self {
        Self {
            url: "https://api.runware.ai/v1".to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl HttpMediaClientConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Media 客户端
///
/// 单次请求直通：无重试、无退避、无熔断，失败原样上抛
pub struct HttpMediaClient {
    client: Client,
    config: HttpMediaClientConfig,
}

impl HttpMediaClient {
    /// 创建新的 HTTP Media 客户端
    pub fn new(config: HttpMediaClientConfig) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MediaError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 共享请求原语：一次 POST `[鉴权, 任务]`，非 2xx 即失败
    async fn send(&self, task: &TaskRecord) -> Result<Value, MediaError> {
        let payload = wire::build_payload(&self.config.api_key, task);

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MediaError::Timeout
                } else if e.is_connect() {
                    MediaError::NetworkError(format!("Cannot connect to media provider: {}", e))
                } else {
                    MediaError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MediaError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 响应体不是 JSON 归为传输层失败，与非 2xx 同级；
        // 合法 JSON 但形状违约在上层判定为 InvalidResponse
        response
            .json::<Value>()
            .await
            .map_err(|e| MediaError::ServiceError(format!("Malformed JSON body: {}", e)))
    }
}

#[async_trait]
impl MediaEnginePort for HttpMediaClient {
    async fn generate_image(&self, task: ImageTask) -> Result<ImageOutput, MediaError> {
        tracing::debug!(
            url = %self.config.url,
            task_id = %task.task_id,
            prompt_len = task.prompt.len(),
            "Sending image inference request"
        );

        let raw = self.send(&TaskRecord::image(&task)).await?;
        let envelope = wire::parse_envelope(&raw)?;
        let image_url = wire::extract_image_url(&envelope)?;

        tracing::info!(task_id = %task.task_id, image_url = %image_url, "Image inference succeeded");

        Ok(ImageOutput { image_url, raw })
    }

    async fn submit_video(&self, task: VideoTask) -> Result<VideoSubmission, MediaError> {
        tracing::debug!(
            url = %self.config.url,
            task_id = %task.task_id,
            prompt_len = task.prompt.len(),
            "Sending video inference request"
        );

        let raw = self.send(&TaskRecord::video(&task)).await?;
        let envelope = wire::parse_envelope(&raw)?;
        let task_id = wire::extract_video_echo(&envelope)?;

        tracing::info!(task_id = %task_id, "Video inference task accepted");

        Ok(VideoSubmission { task_id, raw })
    }

    async fn poll_task(&self, task_id: &TaskId) -> Result<PollOutcome, MediaError> {
        tracing::debug!(url = %self.config.url, task_id = %task_id, "Polling task status");

        let raw = self.send(&TaskRecord::get_response(task_id)).await?;
        let envelope = wire::parse_envelope(&raw)?;
        let poll = wire::normalize_poll(&envelope);

        Ok(PollOutcome {
            status: poll.status,
            video_url: poll.video_url,
            cost: poll.cost,
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpMediaClientConfig::default();
        assert_eq!(config.url, "https://api.runware.ai/v1");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = HttpMediaClientConfig::new("https://example.com/v1", "sk-test").with_timeout(30);
        assert_eq!(config.url, "https://example.com/v1");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.timeout_secs, 30);
    }
}
