/// 注册中心客户端错误类型
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Registry rejected request: status={status}, body={body}")]
    Rejected { status: u16, body: String },
    #[error("Invalid registry response: {0}")]
    InvalidResponse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
