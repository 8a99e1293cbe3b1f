use serde::{Deserialize, Serialize};
use validator::Validate;

/// Persists a new fulfillment state for one order. The backend accepts any
/// status value here; validity checking lives server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Order ID is required"))]
    pub order_id: String,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Triggers the customer-facing status e-mail for one order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationRequest {
    #[validate(length(min = 1, message = "Order ID is required"))]
    pub order_id: String,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    #[validate(email(message = "Recipient email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Order number is required"))]
    pub order_number: String,
}
