use crate::model::Order;

const INITIAL_WINDOW: usize = 5;
const WINDOW_STEP: usize = 5;

/// Bounds how many of the sorted orders are rendered at once. The window
/// only grows within a session; a new session starts back at the initial
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureWindow {
    size: usize,
}

impl DisclosureWindow {
    pub fn new() -> Self {
        Self {
            size: INITIAL_WINDOW,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn expand(&mut self) {
        self.size += WINDOW_STEP;
    }

    /// Prefix of the sorted snapshot, never more than the window size.
    pub fn visible_slice<'a>(&self, orders: &'a [Order]) -> &'a [Order] {
        &orders[..orders.len().min(self.size)]
    }

    /// Whether a "show more" affordance should be offered.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.size
    }
}

impl Default for DisclosureWindow {
    fn default() -> Self {
        Self::new()
    }
}
