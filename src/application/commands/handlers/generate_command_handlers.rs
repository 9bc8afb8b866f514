//! Generate Command Handlers - 生成任务提交
//!
//! 负责套用表单默认值、解析数值字段、生成任务标识，再经
//! MediaEnginePort 发起一次出站调用。本层不做重试。

use std::sync::Arc;

use crate::application::commands::generate_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{ImageTask, MediaEnginePort, SeedImage, VideoTask};
use crate::domain::generation::{DataUri, TaskId};

/// 表单缺省提示词
pub const DEFAULT_PROMPT: &str = "full-body fashion look, editorial, studio lighting, high detail";

const DEFAULT_IMAGE_WIDTH: u32 = 768;
const DEFAULT_IMAGE_HEIGHT: u32 = 1024;
/// 图像模型：字段缺失时的默认值
const DEFAULT_IMAGE_MODEL: &str = "civitai:102438@133677";
/// 图像模型：字段存在但为空白时的回退值
const FALLBACK_IMAGE_MODEL: &str = "runware:101@1";
const DEFAULT_OUTPUT_TYPE: &str = "URL";
const DEFAULT_SEED_STRENGTH: f64 = 0.6;

const DEFAULT_VIDEO_WIDTH: u32 = 864;
const DEFAULT_VIDEO_HEIGHT: u32 = 480;
const DEFAULT_VIDEO_MODEL: &str = "bytedance:1@1";
const DEFAULT_VIDEO_DURATION: u32 = 5;
const DEFAULT_VIDEO_FPS: u32 = 24;

const DEFAULT_NUMBER_RESULTS: u32 = 1;

/// 解析整数表单字段，缺失或空白取默认值
fn parse_u32(field: &str, value: Option<&str>, default: u32) -> Result<u32, ApplicationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v
            .parse::<u32>()
            .map_err(|_| ApplicationError::validation(format!("Invalid {}: {}", field, v))),
        None => Ok(default),
    }
}

/// 解析浮点表单字段，缺失或空白取默认值
fn parse_f64(field: &str, value: Option<&str>, default: f64) -> Result<f64, ApplicationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v
            .parse::<f64>()
            .map_err(|_| ApplicationError::validation(format!("Invalid {}: {}", field, v))),
        None => Ok(default),
    }
}

/// 空白提示词视为未填写
fn resolve_prompt(prompt: Option<String>) -> String {
    prompt
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}

/// 模型字段解析：缺失与空白分别取不同的回退值
fn resolve_model(model: Option<String>, missing: &str, blank: &str) -> String {
    match model {
        None => missing.to_string(),
        Some(m) => {
            let trimmed = m.trim();
            if trimmed.is_empty() {
                blank.to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// 从命令构建图像任务描述，每次调用生成全新的任务标识
fn build_image_task(cmd: GenerateImageCommand) -> Result<ImageTask, ApplicationError> {
    let seed = match cmd.seed_image {
        Some(upload) if !upload.bytes.is_empty() => Some(SeedImage {
            image: DataUri::from_bytes(upload.content_type.as_deref(), &upload.bytes),
            strength: parse_f64("strength", cmd.strength.as_deref(), DEFAULT_SEED_STRENGTH)?,
        }),
        _ => None,
    };

    Ok(ImageTask {
        task_id: TaskId::generate(),
        prompt: resolve_prompt(cmd.prompt),
        width: parse_u32("width", cmd.width.as_deref(), DEFAULT_IMAGE_WIDTH)?,
        height: parse_u32("height", cmd.height.as_deref(), DEFAULT_IMAGE_HEIGHT)?,
        model: resolve_model(cmd.model, DEFAULT_IMAGE_MODEL, FALLBACK_IMAGE_MODEL),
        number_results: parse_u32(
            "numberResults",
            cmd.number_results.as_deref(),
            DEFAULT_NUMBER_RESULTS,
        )?,
        output_type: cmd
            .output_type
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_TYPE.to_string()),
        seed,
    })
}

/// 从命令构建视频任务描述
fn build_video_task(cmd: SubmitVideoCommand) -> Result<VideoTask, ApplicationError> {
    Ok(VideoTask {
        task_id: TaskId::generate(),
        prompt: resolve_prompt(cmd.prompt),
        width: parse_u32("width", cmd.width.as_deref(), DEFAULT_VIDEO_WIDTH)?,
        height: parse_u32("height", cmd.height.as_deref(), DEFAULT_VIDEO_HEIGHT)?,
        model: resolve_model(cmd.model, DEFAULT_VIDEO_MODEL, DEFAULT_VIDEO_MODEL),
        duration: parse_u32("duration", cmd.duration.as_deref(), DEFAULT_VIDEO_DURATION)?,
        fps: parse_u32("fps", cmd.fps.as_deref(), DEFAULT_VIDEO_FPS)?,
        number_results: parse_u32(
            "numberResults",
            cmd.number_results.as_deref(),
            DEFAULT_NUMBER_RESULTS,
        )?,
    })
}

/// GenerateImage Handler - 提交图像生成任务（同步路径）
pub struct GenerateImageHandler {
    media_engine: Arc<dyn MediaEnginePort>,
}

impl GenerateImageHandler {
    pub fn new(media_engine: Arc<dyn MediaEnginePort>) -> Self {
        Self { media_engine }
    }

    pub async fn handle(
        &self,
        cmd: GenerateImageCommand,
    ) -> Result<GenerateImageResponse, ApplicationError> {
        let task = build_image_task(cmd)?;
        let task_id = task.task_id.clone();

        tracing::info!(
            task_id = %task_id,
            width = task.width,
            height = task.height,
            model = %task.model,
            has_seed = task.seed.is_some(),
            "Submitting image inference task"
        );

        let output = self.media_engine.generate_image(task).await?;

        tracing::info!(task_id = %task_id, image_url = %output.image_url, "Image inference completed");

        Ok(GenerateImageResponse {
            task_id,
            image_url: output.image_url,
            raw: output.raw,
        })
    }
}

/// SubmitVideo Handler - 提交视频生成任务（异步路径）
pub struct SubmitVideoHandler {
    media_engine: Arc<dyn MediaEnginePort>,
}

impl SubmitVideoHandler {
    pub fn new(media_engine: Arc<dyn MediaEnginePort>) -> Self {
        Self { media_engine }
    }

    pub async fn handle(
        &self,
        cmd: SubmitVideoCommand,
    ) -> Result<SubmitVideoResponse, ApplicationError> {
        let task = build_video_task(cmd)?;

        tracing::info!(
            task_id = %task.task_id,
            width = task.width,
            height = task.height,
            model = %task.model,
            duration = task.duration,
            fps = task.fps,
            "Submitting video inference task"
        );

        let submission = self.media_engine.submit_video(task).await?;

        tracing::info!(task_id = %submission.task_id, "Video task accepted by provider");

        Ok(SubmitVideoResponse {
            task_id: submission.task_id,
            raw: submission.raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MediaError;
    use crate::infrastructure::adapters::provider::FakeMediaClient;

    #[test]
    fn test_image_defaults_applied() {
        let task = build_image_task(GenerateImageCommand::default()).unwrap();
        assert_eq!(task.prompt, DEFAULT_PROMPT);
        assert_eq!(task.width, 768);
        assert_eq!(task.height, 1024);
        assert_eq!(task.model, "civitai:102438@133677");
        assert_eq!(task.number_results, 1);
        assert_eq!(task.output_type, "URL");
        assert!(task.seed.is_none());
        assert!(!task.task_id.as_str().is_empty());
    }

    #[test]
    fn test_blank_prompt_falls_back_to_default() {
        let cmd = GenerateImageCommand {
            prompt: Some("   ".to_string()),
            ..Default::default()
        };
        let task = build_image_task(cmd).unwrap();
        assert_eq!(task.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_blank_model_uses_fallback_not_missing_default() {
        let cmd = GenerateImageCommand {
            model: Some("  ".to_string()),
            ..Default::default()
        };
        let task = build_image_task(cmd).unwrap();
        assert_eq!(task.model, "runware:101@1");
    }

    #[test]
    fn test_invalid_numeric_field_is_validation_error() {
        let cmd = GenerateImageCommand {
            width: Some("wide".to_string()),
            ..Default::default()
        };
        let err = build_image_task(cmd).unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        let cmd = SubmitVideoCommand {
            fps: Some("24.5fps".to_string()),
            ..Default::default()
        };
        let err = build_video_task(cmd).unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[test]
    fn test_seed_image_becomes_data_uri_with_default_strength() {
        let cmd = GenerateImageCommand {
            seed_image: Some(SeedUpload {
                content_type: Some("image/jpeg".to_string()),
                bytes: vec![1, 2, 3],
            }),
            ..Default::default()
        };
        let task = build_image_task(cmd).unwrap();
        let seed = task.seed.unwrap();
        assert!(seed.image.to_string().starts_with("data:image/jpeg;base64,"));
        assert_eq!(seed.image.decode().unwrap(), vec![1, 2, 3]);
        assert_eq!(seed.strength, 0.6);
    }

    #[test]
    fn test_empty_seed_upload_is_ignored() {
        let cmd = GenerateImageCommand {
            seed_image: Some(SeedUpload {
                content_type: None,
                bytes: Vec::new(),
            }),
            strength: Some("0.9".to_string()),
            ..Default::default()
        };
        let task = build_image_task(cmd).unwrap();
        assert!(task.seed.is_none());
    }

    #[test]
    fn test_video_defaults_applied() {
        let task = build_video_task(SubmitVideoCommand::default()).unwrap();
        assert_eq!(task.width, 864);
        assert_eq!(task.height, 480);
        assert_eq!(task.model, "bytedance:1@1");
        assert_eq!(task.duration, 5);
        assert_eq!(task.fps, 24);
        assert_eq!(task.number_results, 1);
    }

    #[test]
    fn test_task_ids_are_fresh_per_call() {
        let a = build_video_task(SubmitVideoCommand::default()).unwrap();
        let b = build_video_task(SubmitVideoCommand::default()).unwrap();
        assert_ne!(a.task_id, b.task_id);
    }

    #[tokio::test]
    async fn test_submit_video_returns_provider_echo() {
        let handler = SubmitVideoHandler::new(Arc::new(FakeMediaClient::with_defaults()));
        let response = handler
            .handle(SubmitVideoCommand {
                duration: Some("5".to_string()),
                fps: Some("24".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!response.task_id.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_structured_not_a_panic() {
        let handler =
            SubmitVideoHandler::new(Arc::new(FakeMediaClient::failing(MediaError::Timeout)));
        let err = handler.handle(SubmitVideoCommand::default()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::TransportError(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_image_failure_does_not_dereference_missing_result() {
        // 图像路径必须把出站调用视为可失败，而不是直接取 data[0]
        let handler = GenerateImageHandler::new(Arc::new(FakeMediaClient::failing(
            MediaError::InvalidResponse("no imageInference item in response".to_string()),
        )));
        let err = handler.handle(GenerateImageCommand::default()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProviderShapeError(_)));
    }
}
