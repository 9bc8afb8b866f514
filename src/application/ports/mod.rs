//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod media_engine;

pub use media_engine::{
    ImageOutput, ImageTask, MediaEnginePort, MediaError, PollOutcome, SeedImage, VideoSubmission,
    VideoTask,
};
