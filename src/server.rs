use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::config::Config;
use crate::hello::greeter_server::GreeterServer;
use crate::registry::{NacosClient, NamingBackend, Registration, RegistryError, ServiceInstance};
use crate::services::GreeterService;

/// 服务端启动阶段的错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),
    #[error("Failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
    #[error("Registry registration failed: {0}")]
    Registry(#[from] RegistryError),
    #[error("Failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

pub async fn start(config: Config) -> Result<(), ServerError> {
    let backend = Arc::new(NacosClient::new(&config.registry)?);
    run_with_backend(config, backend, shutdown_signal()).await
}

/// 完整启动流程,Naming 后端和停机信号由调用方注入
pub async fn run_with_backend<B: NamingBackend>(
    config: Config,
    backend: Arc<B>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("0.0.0.0:{}", config.server.listen_port).parse()?;

    // 先绑定监听套接字,拿到实际端口后再注册,
    // 保证注册中心里的端口和监听端口一致
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    // 反射服务在注册之前构建:注册成功到开始服务之间
    // 不再有可失败的步骤,每条退出路径都会走到注销
    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(crate::hello::FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let instance = ServiceInstance::from_config(&config.server, local_addr.port());
    let beat_interval = Duration::from_millis(config.registry.heartbeat_interval_ms);

    // 注册失败时直接返回,监听套接字随之关闭,不会开始接受连接
    let registration = Registration::register(backend, instance, beat_interval).await?;

    tracing::info!(addr = %local_addr, "gRPC server listening");

    let serve_result = Server::builder()
        .add_service(reflection)
        .add_service(GreeterServer::new(GreeterService))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await;

    // 无论服务循环正常退出还是收到信号退出,都注销一次;
    // 注销失败只记日志,残留的临时实例由注册中心心跳超时摘除
    if let Err(e) = registration.deregister().await {
        tracing::warn!(error = %e, "Failed to deregister instance, relying on ephemeral TTL");
    }

    serve_result?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
