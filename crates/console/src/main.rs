mod notice;
mod repl;
mod view;

use anyhow::{Context, Result};
use notice::TerminalNotices;
use shared::{abstract_trait::DynOperatorNotices, config::Config, state::AppState, utils::init_logger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger("admin-console");

    let config = Config::init().context("Failed to load configuration")?;
    let notices: DynOperatorNotices = Arc::new(TerminalNotices);
    let state = AppState::new(config, notices.clone());

    info!("✅ Application setup completed successfully.");

    tokio::select! {
        result = repl::run(&state, notices) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutdown signal received (Ctrl+C).");
            Ok(())
        }
    }
}
