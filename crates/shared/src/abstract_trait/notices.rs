use std::sync::Arc;

pub type DynOperatorNotices = Arc<dyn OperatorNoticesTrait + Send + Sync>;

/// Operator-visible outcome channel. Every gateway call funnels its result
/// through here instead of propagating errors upward.
pub trait OperatorNoticesTrait {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
