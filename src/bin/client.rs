use clap::Parser;
use tracing_subscriber::EnvFilter;

use grpc_hello::config::Config;
use grpc_hello::services::greeter_client::{self, InvokerConfig};

#[derive(Parser, Debug)]
#[command(about = "Issue a single SayHello call", long_about = None)]
struct Args {
    /// 要问候的名字
    #[arg(default_value = "world")]
    name: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let invoker_config = InvokerConfig {
        target: config.client.target.clone(),
        ..Default::default()
    };

    // 单次调用,失败即以非零状态退出
    match greeter_client::say_hello(&invoker_config, &args.name).await {
        Ok(message) => println!("Greeting: {message}"),
        Err(e) => {
            tracing::error!(error = %e, "Could not greet");
            std::process::exit(1);
        }
    }
}
