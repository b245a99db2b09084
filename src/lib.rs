pub mod hello {
    tonic::include_proto!("hello");

    /// 编译期生成的描述符,用于 gRPC 服务反射
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("hello_descriptor");
}

pub mod config;
pub mod registry;
pub mod server;
pub mod services;
