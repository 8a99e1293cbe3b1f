mod order;

pub use self::order::{StatusNotificationRequest, UpdateOrderStatusRequest};
