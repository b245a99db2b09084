//! Registry lifecycle module
//!
//! This module contains the service registration lifecycle split into logical components:
//! - `types`: Data structures and type definitions
//! - `client`: Naming backend trait and the Nacos HTTP implementation
//! - `lifecycle`: Registration handle (register / heartbeat / deregister)
//! - `error`: Error types

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod types;

// Re-export public types for easier access
pub use client::{NacosClient, NamingBackend};
pub use error::RegistryError;
pub use lifecycle::Registration;
pub use types::{InstanceRecord, ServiceInstance};
