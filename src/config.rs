use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to read environment overrides: {0}")]
    Env(#[from] envy::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub registry: RegistryConfig,
}

/// 服务端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听端口,0 表示由系统分配
    pub listen_port: u16,
    /// 注册到注册中心的地址。默认回环地址只在本机部署下可达,
    /// 跨主机部署时必须改为其他调用方可达的地址
    pub advertised_ip: String,
    pub service_name: String,
    pub group: String,
    pub cluster: String,
    pub weight: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: 50051,
            advertised_ip: "127.0.0.1".to_string(),
            service_name: "grpc.hello.service".to_string(),
            group: "DEFAULT_GROUP".to_string(),
            cluster: "DEFAULT".to_string(),
            weight: 10.0,
        }
    }
}

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 调用目标地址。单独配置而不从 listen_port 推导,
    /// 服务端用系统分配端口(listen_port = 0)时也要保持可用
    pub target: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            target: "http://127.0.0.1:50051".to_string(),
        }
    }
}

/// 注册中心(Nacos)配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub host: String,
    pub port: u16,
    pub namespace: String,
    /// 单次注册中心请求的超时时间
    pub timeout_ms: u64,
    /// 临时实例心跳间隔
    pub heartbeat_interval_ms: u64,
    pub cache_dir: String,
    pub log_dir: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8848,
            namespace: "public".to_string(),
            timeout_ms: 5000,
            heartbeat_interval_ms: 5000,
            cache_dir: "./nacos/cache".to_string(),
            log_dir: "./nacos/log".to_string(),
        }
    }
}

/// 环境变量覆盖,便于容器部署时不改配置文件
#[derive(Debug, Deserialize)]
struct RegistryOverrides {
    host: Option<String>,
    port: Option<u16>,
    namespace: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // 配置文件缺失时退回默认值
        let mut config = if Path::new(CONFIG_FILE).exists() {
            let config_str = fs::read_to_string(CONFIG_FILE)?;
            toml::from_str(&config_str)?
        } else {
            Config::default()
        };

        let overrides: RegistryOverrides = envy::prefixed("REGISTRY_").from_env()?;
        if let Some(host) = overrides.host {
            config.registry.host = host;
        }
        if let Some(port) = overrides.port {
            config.registry.port = port;
        }
        if let Some(namespace) = overrides.namespace {
            config.registry.namespace = namespace;
        }

        Ok(config)
    }
}
