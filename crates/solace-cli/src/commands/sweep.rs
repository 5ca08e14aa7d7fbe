use chrono::Utc;
use clap::Subcommand;
use solace_core::{Database, RetentionSweeper};
use std::sync::Arc;

#[derive(Subcommand)]
pub enum SweepAction {
    /// Sweep expired messages out of every chat
    All,
    /// Sweep a single chat
    Chat {
        /// Chat id
        chat: String,
    },
}

pub fn run(action: SweepAction) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let db = Database::open()?;
    let store = tokio::sync::Mutex::new(db);
    let sweeper = RetentionSweeper::new();

    match action {
        SweepAction::All => {
            let report = runtime.block_on(sweeper.sweep_all(Arc::new(store)))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        SweepAction::Chat { chat } => {
            let now_ms = Utc::now().timestamp_millis();
            let deleted = runtime.block_on(sweeper.sweep_chat(&store, &chat, now_ms))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "chat": chat,
                    "deleted_messages": deleted,
                }))?
            );
        }
    }
    Ok(())
}
