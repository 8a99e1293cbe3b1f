mod format;
mod logs;

pub use self::format::{format_amount, format_date};
pub use self::logs::init_logger;
