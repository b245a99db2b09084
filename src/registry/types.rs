use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

// 注册到注册中心的服务实例元数据
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInstance {
    pub ip: String,
    pub port: u16,
    pub service_name: String,
    pub group: String,
    pub cluster: String,
    pub weight: f64,
    pub enabled: bool,
    pub healthy: bool,
    pub ephemeral: bool,
}

impl ServiceInstance {
    /// 以默认的分组/集群/权重创建实例
    pub fn new(ip: impl Into<String>, port: u16, service_name: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port,
            service_name: service_name.into(),
            group: "DEFAULT_GROUP".to_string(),
            cluster: "DEFAULT".to_string(),
            weight: 10.0,
            enabled: true,
            healthy: true,
            ephemeral: true,
        }
    }

    /// 从服务端配置构建实例。端口单独传入,
    /// 保证注册的端口与监听套接字实际绑定的端口一致
    pub fn from_config(config: &ServerConfig, port: u16) -> Self {
        Self {
            ip: config.advertised_ip.clone(),
            port,
            service_name: config.service_name.clone(),
            group: config.group.clone(),
            cluster: config.cluster.clone(),
            weight: config.weight,
            enabled: true,
            healthy: true,
            ephemeral: true,
        }
    }
}

// 注册中心返回的实例记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceRecord {
    pub ip: String,
    pub port: u16,
    pub weight: f64,
    pub healthy: bool,
    pub enabled: bool,
    pub ephemeral: bool,
    pub cluster_name: String,
}

// 实例列表查询的响应体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceList {
    pub name: String,
    pub hosts: Vec<InstanceRecord>,
}
