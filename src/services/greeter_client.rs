use std::time::Duration;

use tonic::Status;
use tonic::transport::Endpoint;

use crate::hello::HelloRequest;
use crate::hello::greeter_client::GreeterClient;

/// 调用方错误类型
#[derive(Debug, thiserror::Error)]
pub enum InvokerError {
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("gRPC error: {0}")]
    Grpc(#[from] Status),
    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// 调用方配置
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// 目标地址
    pub target: String,
    /// 从发起调用开始计算的总截止时间,覆盖建连和调用
    pub deadline: Duration,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            target: "http://127.0.0.1:50051".to_string(),
            deadline: Duration::from_secs(1),
        }
    }
}

/// 发起一次有界的 SayHello 调用。
/// 失败(拒绝连接、超时、传输错误)直接返回,不重试
pub async fn say_hello(config: &InvokerConfig, name: &str) -> Result<String, InvokerError> {
    let deadline = config.deadline;

    let call = async {
        let endpoint = Endpoint::from_shared(config.target.clone())?
            .connect_timeout(deadline)
            .timeout(deadline);

        // channel 在函数返回时随作用域释放
        let channel = endpoint.connect().await?;
        let mut client = GreeterClient::new(channel);

        let request = HelloRequest {
            name: name.to_string(),
        };
        let response = client.say_hello(request).await?;
        Ok(response.into_inner().message)
    };

    tokio::time::timeout(deadline, call)
        .await
        .map_err(|_| InvokerError::DeadlineExceeded(deadline))?
}
