use std::time::{Duration, Instant};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use grpc_hello::hello::greeter_server::GreeterServer;
use grpc_hello::services::GreeterService;
use grpc_hello::services::greeter_client::{self, InvokerConfig};

// 在随机端口上拉起一个真实的 Greeter 服务
async fn spawn_greeter() -> InvokerConfig {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        Server::builder()
            .add_service(GreeterServer::new(GreeterService))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .expect("Test server failed");
    });

    InvokerConfig {
        target: format!("http://{addr}"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_say_hello_concatenates_name() {
    let config = spawn_greeter().await;

    let message = greeter_client::say_hello(&config, "world")
        .await
        .expect("Call failed");

    assert_eq!(message, "Hello world");
}

#[tokio::test]
async fn test_say_hello_empty_name() {
    let config = spawn_greeter().await;

    let message = greeter_client::say_hello(&config, "")
        .await
        .expect("Call failed");

    // 空名字也要拼出确定的问候,不裁剪空格
    assert_eq!(message, "Hello ");
}

#[tokio::test]
async fn test_say_hello_preserves_case_and_whitespace() {
    let config = spawn_greeter().await;

    let message = greeter_client::say_hello(&config, "  World  ")
        .await
        .expect("Call failed");

    assert_eq!(message, "Hello   World  ");
}

#[tokio::test]
async fn test_unreachable_server_fails_fast() {
    // 拿一个刚释放的端口,确保没有监听者
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let config = InvokerConfig {
        target: format!("http://{addr}"),
        deadline: Duration::from_secs(1),
    };

    let started = Instant::now();
    let result = greeter_client::say_hello(&config, "world").await;

    assert!(result.is_err());
    // 必须在截止时间窗口内失败,不允许无限挂起
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_stalled_server_hits_deadline() {
    // 监听但从不 accept,连接挂在握手阶段
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let config = InvokerConfig {
        target: format!("http://{addr}"),
        deadline: Duration::from_millis(300),
    };

    let started = Instant::now();
    let result = greeter_client::say_hello(&config, "world").await;

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(2));
}
