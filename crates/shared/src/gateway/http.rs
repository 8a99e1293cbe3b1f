use crate::{
    abstract_trait::OrderGatewayTrait,
    domain::{
        requests::{StatusNotificationRequest, UpdateOrderStatusRequest},
        responses::{AckEnvelope, OrderListEnvelope},
    },
    errors::GatewayError,
    model::Order,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// Reqwest-backed implementation of the backend order endpoints.
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpOrderGateway {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check_ack(ack: AckEnvelope) -> Result<(), GatewayError> {
        if ack.success {
            Ok(())
        } else {
            Err(GatewayError::Rejected(ack.message.unwrap_or_else(|| {
                "Solicitud rechazada por el servidor.".to_string()
            })))
        }
    }
}

#[async_trait]
impl OrderGatewayTrait for HttpOrderGateway {
    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/api/order/list"))
            .header("token", &self.token)
            .json(&json!({}))
            .send()
            .await?;

        let envelope: OrderListEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        if !envelope.success {
            return Err(GatewayError::Rejected(envelope.message.unwrap_or_else(
                || "No se pudo obtener la lista de pedidos.".to_string(),
            )));
        }

        info!("📦 Fetched {} orders from backend", envelope.orders.len());

        Ok(envelope.orders)
    }

    async fn set_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/api/order/status"))
            .header("token", &self.token)
            .json(req)
            .send()
            .await?;

        let ack: AckEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        Self::check_ack(ack)
    }

    async fn dispatch_status_notification(
        &self,
        req: &StatusNotificationRequest,
    ) -> Result<(), GatewayError> {
        // The notification endpoint carries no operator credential in the
        // current backend contract.
        let response = self
            .client
            .post(self.endpoint("/send-email-status"))
            .json(req)
            .send()
            .await?;

        let ack: AckEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        Self::check_ack(ack)
    }
}
