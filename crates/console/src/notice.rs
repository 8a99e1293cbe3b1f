use shared::abstract_trait::OperatorNoticesTrait;

/// Prints operator notices straight to the terminal, the console's stand-in
/// for toast popups.
pub struct TerminalNotices;

impl OperatorNoticesTrait for TerminalNotices {
    fn success(&self, message: &str) {
        println!("✅ {message}");
    }

    fn error(&self, message: &str) {
        println!("❌ {message}");
    }
}
