//! Image HTTP Handlers
//!
//! 图像生成为同步路径：一次出站调用直接返回结果 URL。
//! 表单以 multipart 提交（种子图是可选的文件字段）。

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GenerateImageCommand, SeedUpload};
use crate::infrastructure::http::dto::ImageInferResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

async fn read_text(field: Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))
}

/// 提交图像生成任务
pub async fn infer_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ImageInferResponse>, ApiError> {
    let mut cmd = GenerateImageCommand::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "prompt" => cmd.prompt = Some(read_text(field, "prompt").await?),
            "width" => cmd.width = Some(read_text(field, "width").await?),
            "height" => cmd.height = Some(read_text(field, "height").await?),
            "model" => cmd.model = Some(read_text(field, "model").await?),
            "numberResults" => cmd.number_results = Some(read_text(field, "numberResults").await?),
            "outputType" => cmd.output_type = Some(read_text(field, "outputType").await?),
            "strength" => cmd.strength = Some(read_text(field, "strength").await?),
            "seedImage" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let has_filename = field
                    .file_name()
                    .map(|f| !f.is_empty())
                    .unwrap_or(false);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read seedImage: {}", e)))?
                    .to_vec();

                // 浏览器在未选择文件时也会提交空的文件字段
                if has_filename && !bytes.is_empty() {
                    cmd.seed_image = Some(SeedUpload {
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    let result = state.generate_image_handler.handle(cmd).await?;

    Ok(Json(ImageInferResponse {
        ok: true,
        task_uuid: result.task_id.to_string(),
        image_url: result.image_url,
        raw: result.raw,
    }))
}
