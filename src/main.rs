//! Atelier - AI 时装图像/视频生成工作台
//!
//! - Domain: generation/ (Bounded Context)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use atelier::config::{load_config, print_config};
use atelier::infrastructure::adapters::{HttpMediaClient, HttpMediaClientConfig};
// use atelier::infrastructure::adapters::FakeMediaClient;
use atelier::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},atelier={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Atelier - AI 时装图像/视频生成工作台");
    print_config(&config);

    // 创建供应商 HTTP 客户端
    let media_config = HttpMediaClientConfig {
        url: config.provider.url.clone(),
        api_key: config.provider.api_key.clone(),
        timeout_secs: config.provider.timeout_secs,
    };
    let media_engine = Arc::new(HttpMediaClient::new(media_config)?);

    // // 供应商 Fake 客户端（本地调试用，不发起网络调用）
    // let media_engine = Arc::new(FakeMediaClient::with_defaults());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(media_engine);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
