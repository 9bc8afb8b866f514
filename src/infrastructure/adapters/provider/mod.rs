//! Provider Adapter - 生成媒体供应商客户端实现

mod fake_media_client;
mod http_media_client;
pub mod wire;

pub use fake_media_client::{FakeMediaClient, FakeMediaClientConfig};
pub use http_media_client::{HttpMediaClient, HttpMediaClientConfig};
