use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::OrderStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub last_name: String,
    #[serde(rename = "address")]
    pub street: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
}

/// One customer purchase as the backend returns it. The console only ever
/// mutates `status`; everything else is read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub address: ShippingAddress,
    pub amount: f64,
    pub payment_method: String,
    pub payment: bool,
    pub status: OrderStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl Order {
    /// Derived payment indicator: the capture flag from the backend, or any
    /// state at or past `Pagado`.
    pub fn payment_done(&self) -> bool {
        self.payment || self.status.marks_paid()
    }
}
