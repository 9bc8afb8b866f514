//! Atelier - AI 时装图像/视频生成工作台
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Generation Context: 任务标识、种子图 Data URI、归一化状态
//!
//! 应用层 (application/):
//! - Ports: 端口定义（MediaEngine）
//! - Commands: CQRS 命令处理器（图像同步生成、视频异步提交）
//! - Queries: CQRS 查询处理器（任务状态轮询）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: 供应商 HTTP 客户端与测试用 Fake
//!
//! 本端无任务持久化：视频任务状态由供应商维护，浏览器拿到
//! 任务标识后自行轮询，每次轮询都是一次无状态的快照查询。

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
