/// Data Transfer Objects for application layer
///
/// DTOs carry command inputs into the use cases and results back out,
/// keeping the CLI types out of the application layer.
mod certify_request;

pub use certify_request::{CertificationTool, CertifyRequest, CertifyResponse};
