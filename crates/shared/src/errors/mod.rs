mod gateway;
mod service;

pub use self::gateway::GatewayError;
pub use self::service::ServiceError;
