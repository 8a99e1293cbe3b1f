use thiserror::Error;

/// The two failure kinds the console distinguishes: the request never made
/// it (transport) or the backend answered `success: false` (rejection).
/// Both surface to the operator the same way.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::Transport(error.to_string())
    }
}
