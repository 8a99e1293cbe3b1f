use crate::errors::gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
