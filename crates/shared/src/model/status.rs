use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment states an order moves through. The backend is the authority
/// on which transitions are accepted; the console offers every known state
/// from any other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pedido realizado")]
    Placed,
    #[serde(rename = "Pagado")]
    Paid,
    #[serde(rename = "Empacando")]
    Packing,
    #[serde(rename = "Enviado")]
    Shipped,
    /// Backend values outside the known set degrade to an unselected state
    /// instead of failing deserialization.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Paid,
        OrderStatus::Packing,
        OrderStatus::Shipped,
    ];

    /// Human-facing label as the backend stores it. `None` for values outside
    /// the known set.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Placed => Some("Pedido realizado"),
            OrderStatus::Paid => Some("Pagado"),
            OrderStatus::Packing => Some("Empacando"),
            OrderStatus::Shipped => Some("Enviado"),
            OrderStatus::Unknown => None,
        }
    }

    /// Whether this state implies the payment was captured.
    pub fn marks_paid(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid | OrderStatus::Packing | OrderStatus::Shipped
        )
    }

    /// Parses operator input from the status selector. Accepts the full label
    /// or its last word, case-insensitive.
    pub fn from_selector(input: &str) -> Option<OrderStatus> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "pedido realizado" | "realizado" => Some(OrderStatus::Placed),
            "pagado" => Some(OrderStatus::Paid),
            "empacando" => Some(OrderStatus::Packing),
            "enviado" => Some(OrderStatus::Shipped),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("(sin seleccionar)"))
    }
}
