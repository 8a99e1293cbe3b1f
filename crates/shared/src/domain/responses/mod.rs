mod api;
mod order;

pub use self::api::ApiResponse;
pub use self::order::{AckEnvelope, OrderListEnvelope};
