//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：任务提交（图像同步、视频异步）

mod generate_commands;

pub mod handlers;

pub use generate_commands::*;
