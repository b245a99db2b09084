use tonic::{Request, Response, Status};

use crate::hello::greeter_server::Greeter;
use crate::hello::{HelloReply, HelloRequest};

// 问候服务实现,无内部状态
#[derive(Debug, Default)]
pub struct GreeterService;

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        let req = request.into_inner();
        tracing::debug!(name = %req.name, "Handling SayHello");

        let reply = HelloReply {
            message: format!("Hello {}", req.name),
        };

        Ok(Response::new(reply))
    }
}
