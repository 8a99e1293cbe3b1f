mod reporter;
mod status;
mod store;
mod window;

pub use self::reporter::AggregateReporter;
pub use self::status::{StatusOutcome, StatusTransitionService};
pub use self::store::OrderStore;
pub use self::window::DisclosureWindow;

#[cfg(test)]
pub(crate) mod testing;
