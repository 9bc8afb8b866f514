//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MediaEngine）
//! - commands: CQRS 命令及处理器（任务提交）
//! - queries: CQRS 查询及处理器（状态轮询）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{GenerateImageHandler, SubmitVideoHandler},
    GenerateImageCommand,
    GenerateImageResponse,
    SeedUpload,
    SubmitVideoCommand,
    SubmitVideoResponse,
};

pub use error::ApplicationError;

pub use ports::{
    ImageOutput, ImageTask, MediaEnginePort, MediaError, PollOutcome, SeedImage, VideoSubmission,
    VideoTask,
};

pub use queries::{
    handlers::PollTaskStatusHandler,
    PollTaskStatusQuery,
    PollTaskStatusResponse,
};
