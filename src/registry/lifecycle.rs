use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::client::NamingBackend;
use super::error::RegistryError;
use super::types::ServiceInstance;

/// 一次成功注册对应的生命周期句柄。
///
/// 句柄存在期间实例处于已注册状态并持续发送心跳;
/// [`Registration::deregister`] 消费句柄,保证每次注册最多注销一次。
#[derive(Debug)]
pub struct Registration<B: NamingBackend> {
    backend: Arc<B>,
    instance: ServiceInstance,
    heartbeat: JoinHandle<()>,
}

impl<B: NamingBackend> Registration<B> {
    /// 注册实例。只尝试一次,失败直接返回错误,由调用方中止启动
    pub async fn register(
        backend: Arc<B>,
        instance: ServiceInstance,
        beat_interval: Duration,
    ) -> Result<Self, RegistryError> {
        backend.register_instance(&instance).await?;

        // 临时实例靠心跳续约,心跳停止后由注册中心按 TTL 摘除
        let beat_backend = backend.clone();
        let beat_instance = instance.clone();
        let heartbeat = tokio::spawn(async move {
            let mut interval = tokio::time::interval(beat_interval);
            // 首个 tick 立即完成,跳过以免和注册请求挤在一起
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = beat_backend.send_heartbeat(&beat_instance).await {
                    tracing::warn!(
                        service_name = %beat_instance.service_name,
                        error = %e,
                        "Heartbeat failed"
                    );
                }
            }
        });

        Ok(Self {
            backend,
            instance,
            heartbeat,
        })
    }

    /// 被注册的实例元数据
    pub fn instance(&self) -> &ServiceInstance {
        &self.instance
    }

    /// 注销实例。先停心跳再发注销请求,
    /// 避免注销之后的心跳把临时实例重新拉起来
    pub async fn deregister(self) -> Result<(), RegistryError> {
        self.heartbeat.abort();
        self.backend.deregister_instance(&self.instance).await
    }
}

impl<B: NamingBackend> Drop for Registration<B> {
    fn drop(&mut self) {
        // 只停后台任务,注销必须显式调用
        self.heartbeat.abort();
    }
}
