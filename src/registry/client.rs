use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::error::RegistryError;
use super::types::{InstanceList, InstanceRecord, ServiceInstance};
use crate::config::RegistryConfig;

/// Naming 后端抽象。生产实现走 Nacos HTTP Open API,
/// 测试可以用内存实现替换
#[tonic::async_trait]
pub trait NamingBackend: Send + Sync + 'static {
    async fn register_instance(&self, instance: &ServiceInstance) -> Result<(), RegistryError>;

    async fn deregister_instance(&self, instance: &ServiceInstance) -> Result<(), RegistryError>;

    async fn list_instances(
        &self,
        service_name: &str,
        group: &str,
        cluster: &str,
    ) -> Result<Vec<InstanceRecord>, RegistryError>;

    async fn send_heartbeat(&self, instance: &ServiceInstance) -> Result<(), RegistryError>;
}

/// Nacos 注册中心客户端
#[derive(Debug, Clone)]
pub struct NacosClient {
    http: reqwest::Client,
    base_url: String,
    namespace: String,
    cache_dir: PathBuf,
}

impl NacosClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        // 缓存目录存放实例列表快照,日志目录留给排障输出
        let cache_dir = PathBuf::from(&config.cache_dir);
        fs::create_dir_all(&cache_dir)?;
        fs::create_dir_all(&config.log_dir)?;

        Ok(Self {
            http,
            base_url: format!("http://{}:{}/nacos/v1/ns", config.host, config.port),
            namespace: config.namespace.clone(),
            cache_dir,
        })
    }

    fn instance_params(&self, instance: &ServiceInstance) -> Vec<(&'static str, String)> {
        vec![
            ("ip", instance.ip.clone()),
            ("port", instance.port.to_string()),
            ("serviceName", instance.service_name.clone()),
            ("groupName", instance.group.clone()),
            ("clusterName", instance.cluster.clone()),
            ("namespaceId", self.namespace.clone()),
            ("ephemeral", instance.ephemeral.to_string()),
        ]
    }

    // Nacos 对注册/注销请求以 200 + "ok" 表示成功
    async fn expect_ok(response: reqwest::Response) -> Result<(), RegistryError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim() != "ok" {
            return Err(RegistryError::InvalidResponse(body));
        }
        Ok(())
    }
}

#[tonic::async_trait]
impl NamingBackend for NacosClient {
    async fn register_instance(&self, instance: &ServiceInstance) -> Result<(), RegistryError> {
        let mut params = self.instance_params(instance);
        params.push(("weight", instance.weight.to_string()));
        params.push(("enabled", instance.enabled.to_string()));
        params.push(("healthy", instance.healthy.to_string()));

        let response = self
            .http
            .post(format!("{}/instance", self.base_url))
            .query(&params)
            .send()
            .await?;

        Self::expect_ok(response).await?;
        tracing::info!(
            service_name = %instance.service_name,
            ip = %instance.ip,
            port = instance.port,
            "Registered instance with registry"
        );
        Ok(())
    }

    async fn deregister_instance(&self, instance: &ServiceInstance) -> Result<(), RegistryError> {
        let response = self
            .http
            .delete(format!("{}/instance", self.base_url))
            .query(&self.instance_params(instance))
            .send()
            .await?;

        Self::expect_ok(response).await?;
        tracing::info!(
            service_name = %instance.service_name,
            ip = %instance.ip,
            port = instance.port,
            "Deregistered instance from registry"
        );
        Ok(())
    }

    async fn list_instances(
        &self,
        service_name: &str,
        group: &str,
        cluster: &str,
    ) -> Result<Vec<InstanceRecord>, RegistryError> {
        let response = self
            .http
            .get(format!("{}/instance/list", self.base_url))
            .query(&[
                ("serviceName", service_name),
                ("groupName", group),
                ("clusters", cluster),
                ("namespaceId", self.namespace.as_str()),
                ("healthyOnly", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let list: InstanceList = response.json().await?;

        // 把最近一次查询结果落盘,进程重启后可用于排障
        let snapshot = self.cache_dir.join(format!("{group}@@{service_name}"));
        if let Ok(json) = serde_json::to_string_pretty(&list) {
            if let Err(e) = fs::write(&snapshot, json) {
                tracing::debug!(error = %e, path = %snapshot.display(), "Failed to write instance cache snapshot");
            }
        }

        Ok(list.hosts)
    }

    async fn send_heartbeat(&self, instance: &ServiceInstance) -> Result<(), RegistryError> {
        let beat = serde_json::json!({
            "ip": instance.ip,
            "port": instance.port,
            "serviceName": format!("{}@@{}", instance.group, instance.service_name),
            "cluster": instance.cluster,
            "weight": instance.weight,
            "scheduled": true,
        });
        let beat_param = beat.to_string();

        let response = self
            .http
            .put(format!("{}/instance/beat", self.base_url))
            .query(&[
                ("serviceName", instance.service_name.as_str()),
                ("groupName", instance.group.as_str()),
                ("namespaceId", self.namespace.as_str()),
                ("ephemeral", "true"),
                ("beat", beat_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
