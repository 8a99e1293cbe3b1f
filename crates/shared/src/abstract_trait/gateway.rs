use crate::{
    domain::requests::{StatusNotificationRequest, UpdateOrderStatusRequest},
    errors::GatewayError,
    model::Order,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderGateway = Arc<dyn OrderGatewayTrait + Send + Sync>;

/// Backend endpoints the console depends on. No retries, no timeouts and no
/// cancellation anywhere: a call either resolves or reports its error once.
#[async_trait]
pub trait OrderGatewayTrait {
    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError>;

    async fn set_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<(), GatewayError>;

    async fn dispatch_status_notification(
        &self,
        req: &StatusNotificationRequest,
    ) -> Result<(), GatewayError>;
}
