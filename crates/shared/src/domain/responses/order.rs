use crate::model::Order;
use serde::{Deserialize, Serialize};

/// Envelope returned by the order listing endpoint. Orders arrive unsorted;
/// ordering is the console's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListEnvelope {
    pub success: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by the status persistence and notification endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
