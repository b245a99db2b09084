pub mod greeter_client;
pub mod greeter_service;

pub use greeter_client::{InvokerConfig, InvokerError};
pub use greeter_service::GreeterService;
