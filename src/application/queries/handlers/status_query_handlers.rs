//! Status Query Handlers - 任务状态轮询

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MediaEnginePort;
use crate::application::queries::status_queries::{PollTaskStatusQuery, PollTaskStatusResponse};
use crate::domain::generation::TaskId;

/// PollTaskStatus Handler - 轮询一次任务状态
pub struct PollTaskStatusHandler {
    media_engine: Arc<dyn MediaEnginePort>,
}

impl PollTaskStatusHandler {
    pub fn new(media_engine: Arc<dyn MediaEnginePort>) -> Self {
        Self { media_engine }
    }

    pub async fn handle(
        &self,
        query: PollTaskStatusQuery,
    ) -> Result<PollTaskStatusResponse, ApplicationError> {
        let task_id = TaskId::new(query.task_id).map_err(ApplicationError::validation)?;

        let outcome = self.media_engine.poll_task(&task_id).await?;

        tracing::debug!(
            task_id = %task_id,
            status = %outcome.status.as_str(),
            has_url = outcome.video_url.is_some(),
            "Task status polled"
        );

        Ok(PollTaskStatusResponse {
            status: outcome.status,
            video_url: outcome.video_url,
            cost: outcome.cost,
            raw: outcome.raw,
        })
    }
}
