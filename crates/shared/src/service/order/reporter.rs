use crate::model::Order;

/// Derived summary over the full loaded set, not just the visible window.
/// Recomputed on every snapshot change; never cached across loads.
pub struct AggregateReporter;

impl AggregateReporter {
    pub fn total_items(orders: &[Order]) -> usize {
        orders.iter().map(|order| order.items.len()).sum()
    }
}
