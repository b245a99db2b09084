use tracing_subscriber::EnvFilter;

use grpc_hello::config::Config;
use grpc_hello::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 所有启动错误汇聚到这里统一决定退出
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start(config).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
