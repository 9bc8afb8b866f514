//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Generation Context: 生成任务（任务标识、种子图 Data URI、归一化状态）

pub mod generation;
