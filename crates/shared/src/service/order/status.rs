use crate::{
    abstract_trait::{DynOperatorNotices, DynOrderGateway},
    domain::requests::{StatusNotificationRequest, UpdateOrderStatusRequest},
    errors::GatewayError,
    model::OrderStatus,
    service::order::OrderStore,
};
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

/// Summary of one transition attempt. Both flags are independent; a failed
/// notification never implies a failed persistence or the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOutcome {
    pub persisted: bool,
    pub notified: bool,
}

/// Moves a single order to an operator-chosen fulfillment state and attempts
/// to notify the customer. Persistence and notification are issued as two
/// concurrent requests with no ordering or transactional coupling; each
/// outcome is reported to the operator on its own and never propagates past
/// this service.
pub struct StatusTransitionService {
    gateway: DynOrderGateway,
    store: Arc<OrderStore>,
    notices: DynOperatorNotices,
}

impl StatusTransitionService {
    pub fn new(
        gateway: DynOrderGateway,
        store: Arc<OrderStore>,
        notices: DynOperatorNotices,
    ) -> Self {
        Self {
            gateway,
            store,
            notices,
        }
    }

    pub async fn set_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
        recipient_email: &str,
        order_number: &str,
    ) -> StatusOutcome {
        let Some(label) = new_status.label() else {
            self.notices.error("Estado de pedido desconocido.");
            return StatusOutcome {
                persisted: false,
                notified: false,
            };
        };

        info!("✏️ Setting status of order {order_id} to {label}");

        let persist = self.persist(order_id, label);
        let notify = self.notify(order_id, label, recipient_email, order_number);
        let (persisted, notified) = tokio::join!(persist, notify);

        StatusOutcome {
            persisted,
            notified,
        }
    }

    async fn persist(&self, order_id: &str, status: &str) -> bool {
        let req = UpdateOrderStatusRequest {
            order_id: order_id.to_string(),
            status: status.to_string(),
        };

        match self.gateway.set_order_status(&req).await {
            Ok(()) => {
                info!("✅ Order {order_id} status persisted as {status}");
                self.notices.success("Estado del pedido actualizado.");

                // Reload-after-write: the view must reflect backend truth,
                // never an optimistic local patch.
                if let Err(e) = self.store.load().await {
                    error!("❌ Failed to refresh orders after status change: {e}");
                    self.notices.error(&e.to_string());
                }

                true
            }
            Err(GatewayError::Rejected(message)) => {
                error!("❌ Backend rejected status change for order {order_id}: {message}");
                self.notices.error(&message);
                false
            }
            Err(e) => {
                error!("❌ Failed to persist status for order {order_id}: {e}");
                self.notices.error(&e.to_string());
                false
            }
        }
    }

    async fn notify(
        &self,
        order_id: &str,
        status: &str,
        recipient_email: &str,
        order_number: &str,
    ) -> bool {
        let req = StatusNotificationRequest {
            order_id: order_id.to_string(),
            status: status.to_string(),
            email: recipient_email.to_string(),
            order_number: order_number.to_string(),
        };

        if let Err(errors) = req.validate() {
            error!("❌ Invalid notification request for order {order_id}: {errors}");
            self.notices.error("Error al enviar el email.");
            return false;
        }

        match self.gateway.dispatch_status_notification(&req).await {
            Ok(()) => {
                info!("📧 Status email dispatched for order {order_id}");
                self.notices.success("Email enviado exitosamente.");
                true
            }
            Err(GatewayError::Rejected(message)) => {
                error!("❌ Backend rejected status email for order {order_id}: {message}");
                self.notices.error(&message);
                false
            }
            Err(e) => {
                error!("❌ Failed to dispatch status email for order {order_id}: {e}");
                self.notices.error("Error al enviar el email.");
                false
            }
        }
    }
}
