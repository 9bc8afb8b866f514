//! Generation Context - 生成任务上下文

mod value_objects;

pub use value_objects::{DataUri, TaskId, TaskStatus};
