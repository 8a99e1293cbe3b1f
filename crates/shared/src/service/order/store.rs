use crate::{
    abstract_trait::DynOrderGateway, domain::responses::ApiResponse, errors::ServiceError,
    model::Order,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Default)]
struct Snapshot {
    orders: Vec<Order>,
    applied_seq: u64,
}

/// Session-local cache of the backend order set. The snapshot is only ever
/// replaced wholesale, sorted by identifier descending so the newest orders
/// come first.
pub struct OrderStore {
    gateway: DynOrderGateway,
    snapshot: Mutex<Snapshot>,
    issued_seq: AtomicU64,
}

impl OrderStore {
    pub fn new(gateway: DynOrderGateway) -> Self {
        Self {
            gateway,
            snapshot: Mutex::new(Snapshot::default()),
            issued_seq: AtomicU64::new(0),
        }
    }

    /// Fetches the full order collection and replaces the snapshot. On
    /// failure the previous snapshot stays untouched. Concurrent loads can
    /// resolve out of order; a response older than the last applied one is
    /// discarded so the view always reflects the most recent fetch.
    pub async fn load(&self) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        let seq = self.issued_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let mut orders = match self.gateway.list_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                error!("❌ Failed to load orders: {e}");
                return Err(ServiceError::Gateway(e));
            }
        };

        orders.sort_by(|a, b| b.id.cmp(&a.id));

        let mut snapshot = self.snapshot.lock().await;
        if seq < snapshot.applied_seq {
            info!(
                "🔁 Discarding stale order fetch (seq {seq} < {})",
                snapshot.applied_seq
            );
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Stale order fetch discarded".to_string(),
                data: snapshot.orders.clone(),
            });
        }

        snapshot.orders = orders;
        snapshot.applied_seq = seq;

        info!("✅ Order snapshot replaced, {} orders", snapshot.orders.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders loaded successfully".to_string(),
            data: snapshot.orders.clone(),
        })
    }

    /// Current sorted snapshot; no side effects.
    pub async fn current(&self) -> Vec<Order> {
        self.snapshot.lock().await.orders.clone()
    }
}
