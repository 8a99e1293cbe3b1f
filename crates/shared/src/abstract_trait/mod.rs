mod gateway;
mod notices;

pub use self::gateway::{DynOrderGateway, OrderGatewayTrait};
pub use self::notices::{DynOperatorNotices, OperatorNoticesTrait};
