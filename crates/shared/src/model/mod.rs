mod order;
mod status;

pub use self::order::{Order, OrderItem, ShippingAddress};
pub use self::status::OrderStatus;
