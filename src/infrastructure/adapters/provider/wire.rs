//! Provider Wire Contract - 供应商线上契约
//!
//! 出站载荷固定为两元素 JSON 数组：`[鉴权记录, 任务/查询记录]`。
//! 响应为 `{ data: [...], errors?: [...] }`，结果项按 taskType 区分，
//! 未知或缺失的 taskType 落入 Unknown 变体而不是解析失败。

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::application::ports::{ImageTask, MediaError, VideoTask};
use crate::domain::generation::{TaskId, TaskStatus};

/// 鉴权前导记录（载荷第 0 个元素）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRecord<'a> {
    pub task_type: &'static str,
    pub api_key: &'a str,
}

impl<'a> AuthenticationRecord<'a> {
    pub fn new(api_key: &'a str) -> Self {
        Self {
            task_type: "authentication",
            api_key,
        }
    }
}

/// 任务/查询记录（载荷第 1 个元素）
#[derive(Debug, Serialize)]
#[serde(tag = "taskType")]
pub enum TaskRecord {
    #[serde(rename = "imageInference", rename_all = "camelCase")]
    ImageInference {
        #[serde(rename = "taskUUID")]
        task_uuid: String,
        positive_prompt: String,
        width: u32,
        height: u32,
        model: String,
        number_results: u32,
        output_type: String,
        output_format: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed_image: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        strength: Option<f64>,
    },
    #[serde(rename = "videoInference", rename_all = "camelCase")]
    VideoInference {
        #[serde(rename = "taskUUID")]
        task_uuid: String,
        /// 视频必须走异步投递
        delivery_method: &'static str,
        output_type: &'static str,
        output_format: &'static str,
        include_cost: bool,
        positive_prompt: String,
        width: u32,
        height: u32,
        model: String,
        duration: u32,
        fps: u32,
        number_results: u32,
    },
    #[serde(rename = "getResponse", rename_all = "camelCase")]
    GetResponse {
        #[serde(rename = "taskUUID")]
        task_uuid: String,
    },
}

impl TaskRecord {
    pub fn image(task: &ImageTask) -> Self {
        let (seed_image, strength) = match &task.seed {
            Some(seed) => (Some(seed.image.to_string()), Some(seed.strength)),
            None => (None, None),
        };
        TaskRecord::ImageInference {
            task_uuid: task.task_id.to_string(),
            positive_prompt: task.prompt.clone(),
            width: task.width,
            height: task.height,
            model: task.model.clone(),
            number_results: task.number_results,
            output_type: task.output_type.clone(),
            output_format: "JPG",
            seed_image,
            strength,
        }
    }

    pub fn video(task: &VideoTask) -> Self {
        TaskRecord::VideoInference {
            task_uuid: task.task_id.to_string(),
            delivery_method: "async",
            output_type: "URL",
            output_format: "MP4",
            include_cost: true,
            positive_prompt: task.prompt.clone(),
            width: task.width,
            height: task.height,
            model: task.model.clone(),
            duration: task.duration,
            fps: task.fps,
            number_results: task.number_results,
        }
    }

    pub fn get_response(task_id: &TaskId) -> Self {
        TaskRecord::GetResponse {
            task_uuid: task_id.to_string(),
        }
    }
}

/// 组装两元素出站载荷
pub fn build_payload(api_key: &str, task: &TaskRecord) -> Value {
    json!([AuthenticationRecord::new(api_key), task])
}

/// 供应商响应信封
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEnvelope {
    #[serde(default)]
    pub data: Vec<ResultItem>,
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

/// 结果项
///
/// 无法识别的结果项（未知或缺失的 taskType）落入 Unknown，
/// 归一化时跳过
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResultItem {
    Inference(InferenceItem),
    Unknown(Value),
}

/// 已识别的推理结果项（图像与视频共享同一松散字段集）
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "taskType")]
pub enum InferenceItem {
    #[serde(rename = "imageInference")]
    ImageInference(InferenceResult),
    #[serde(rename = "videoInference")]
    VideoInference(InferenceResult),
}

/// 推理结果项的字段集（供应商字段均可能缺失）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InferenceResult {
    #[serde(rename = "taskUUID", default)]
    pub task_uuid: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "videoURL", default)]
    pub video_url: Option<String>,
    /// 部分供应商节点返回小写拼法 videoUrl
    #[serde(rename = "videoUrl", default)]
    pub video_url_alt: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl InferenceResult {
    /// 结果 URL，优先 videoURL，回退 videoUrl
    pub fn result_url(&self) -> Option<&str> {
        self.video_url.as_deref().or(self.video_url_alt.as_deref())
    }
}

/// 错误项（至少携带 status 状态码）
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub status: Option<String>,
}

/// 归一化后的轮询快照
#[derive(Debug, Clone)]
pub struct NormalizedPoll {
    pub status: TaskStatus,
    pub video_url: Option<String>,
    pub cost: Option<f64>,
}

/// 解析响应信封；解析失败按契约违反处理
pub fn parse_envelope(raw: &Value) -> Result<ProviderEnvelope, MediaError> {
    serde_json::from_value(raw.clone())
        .map_err(|e| MediaError::InvalidResponse(format!("Failed to parse provider response: {}", e)))
}

/// 从视频提交回执中提取回显的任务标识
pub fn extract_video_echo(envelope: &ProviderEnvelope) -> Result<TaskId, MediaError> {
    let echo = envelope.data.iter().find_map(|item| match item {
        ResultItem::Inference(InferenceItem::VideoInference(result)) => {
            result.task_uuid.as_deref()
        }
        _ => None,
    });

    let task_uuid = echo.ok_or_else(|| {
        MediaError::InvalidResponse("no videoInference echo in response".to_string())
    })?;

    TaskId::new(task_uuid).map_err(|e| MediaError::InvalidResponse(e.to_string()))
}

/// 从图像同步响应中提取结果 URL
pub fn extract_image_url(envelope: &ProviderEnvelope) -> Result<String, MediaError> {
    envelope
        .data
        .iter()
        .find_map(|item| match item {
            ResultItem::Inference(InferenceItem::ImageInference(result)) => {
                result.image_url.clone()
            }
            _ => None,
        })
        .ok_or_else(|| {
            MediaError::InvalidResponse("no imageInference result with imageURL in response".to_string())
        })
}

/// 将一次 getResponse 响应归一为三值状态
///
/// 扫描规则：
/// - 命中 success 立即停止（取 URL 与 cost）
/// - pending/processing 归一为 processing，但继续扫描后续项，
///   后出现的 success 项仍然生效
/// - 未知状态与未知 taskType 不影响归一结果
/// - errors 非空且尚未 success 时，以第一个错误项的状态码覆盖；
///   错误从不覆盖 success
pub fn normalize_poll(envelope: &ProviderEnvelope) -> NormalizedPoll {
    let mut status = TaskStatus::Pending;
    let mut video_url = None;
    let mut cost = None;

    for item in &envelope.data {
        let ResultItem::Inference(InferenceItem::VideoInference(result)) = item else {
            continue;
        };
        match result.status.as_deref() {
            Some("success") => {
                status = TaskStatus::Success;
                video_url = result.result_url().map(str::to_owned);
                cost = result.cost;
                break;
            }
            Some("pending") | Some("processing") => {
                status = TaskStatus::Processing;
            }
            _ => {}
        }
    }

    if !status.is_success() {
        if let Some(first) = envelope.errors.first() {
            status = TaskStatus::Error(
                first.status.clone().unwrap_or_else(|| "error".to_string()),
            );
        }
    }

    NormalizedPoll {
        status,
        video_url,
        cost,
    }
}
