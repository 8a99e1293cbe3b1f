use crate::{
    abstract_trait::{OperatorNoticesTrait, OrderGatewayTrait},
    domain::requests::{StatusNotificationRequest, UpdateOrderStatusRequest},
    errors::GatewayError,
    model::{Order, OrderItem, OrderStatus, ShippingAddress},
};
use async_trait::async_trait;
use chrono::TimeZone;
use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio::sync::Notify;

pub(crate) fn order(id: &str, item_count: usize, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        order_number: format!("PED-{id}"),
        items: (0..item_count)
            .map(|i| OrderItem {
                name: format!("Producto {i}"),
                quantity: 1,
            })
            .collect(),
        address: ShippingAddress {
            name: "Ana".to_string(),
            last_name: "García".to_string(),
            street: "Calle 1 #2-3".to_string(),
            email: "ana@example.com".to_string(),
            phone: "5550000".to_string(),
            city: "Bogotá".to_string(),
            province: "Cundinamarca".to_string(),
            country: "Colombia".to_string(),
            postal_code: "110111".to_string(),
        },
        amount: 100.0,
        payment_method: "COD".to_string(),
        payment: false,
        status,
        date: chrono::Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
    }
}

/// Scripted gateway: queued results are popped per call, listing calls are
/// counted, and the first listing call can be held behind a gate to force a
/// resolution-order race.
pub(crate) struct MockOrderGateway {
    list_results: Mutex<VecDeque<Result<Vec<Order>, GatewayError>>>,
    status_results: Mutex<VecDeque<Result<(), GatewayError>>>,
    notify_results: Mutex<VecDeque<Result<(), GatewayError>>>,
    list_calls: AtomicUsize,
    status_requests: Mutex<Vec<UpdateOrderStatusRequest>>,
    notify_requests: Mutex<Vec<StatusNotificationRequest>>,
    first_list_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockOrderGateway {
    pub fn new() -> Self {
        Self {
            list_results: Mutex::new(VecDeque::new()),
            status_results: Mutex::new(VecDeque::new()),
            notify_results: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            status_requests: Mutex::new(Vec::new()),
            notify_requests: Mutex::new(Vec::new()),
            first_list_gate: Mutex::new(None),
        }
    }

    pub fn push_list(&self, result: Result<Vec<Order>, GatewayError>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn push_status(&self, result: Result<(), GatewayError>) {
        self.status_results.lock().unwrap().push_back(result);
    }

    pub fn push_notify(&self, result: Result<(), GatewayError>) {
        self.notify_results.lock().unwrap().push_back(result);
    }

    pub fn gate_first_list(&self, gate: Arc<Notify>) {
        *self.first_list_gate.lock().unwrap() = Some(gate);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn status_requests(&self) -> Vec<UpdateOrderStatusRequest> {
        self.status_requests.lock().unwrap().clone()
    }

    pub fn notify_requests(&self) -> Vec<StatusNotificationRequest> {
        self.notify_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderGatewayTrait for MockOrderGateway {
    async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = if call == 0 {
            self.first_list_gate.lock().unwrap().take()
        } else {
            None
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn set_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<(), GatewayError> {
        self.status_requests.lock().unwrap().push(req.clone());
        self.status_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn dispatch_status_notification(
        &self,
        req: &StatusNotificationRequest,
    ) -> Result<(), GatewayError> {
        self.notify_requests.lock().unwrap().push(req.clone());
        self.notify_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// Notice sink that records what the operator would have seen.
#[derive(Default)]
pub(crate) struct RecordingNotices {
    entries: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotices {
    pub fn successes(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| !*ok)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl OperatorNoticesTrait for RecordingNotices {
    fn success(&self, message: &str) {
        self.entries.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries.lock().unwrap().push((false, message.to_string()));
    }
}
