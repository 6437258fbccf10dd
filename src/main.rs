//! Driftmark - Fund Transfer Service
//!
//! Process bootstrap:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Logging  │───▶│  Ledger  │───▶│ Gateway  │
//! │  (YAML)  │    │(tracing) │    │  (seed)  │    │ (serve)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `driftmark [--env dev] [--port 50051]`

use std::sync::Arc;

use driftmark::config::AppConfig;
use driftmark::gateway;
use driftmark::ledger::Ledger;
use driftmark::transfer::TransferProcessor;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = driftmark::logging::init_logging(&app_config);

    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    tracing::info!("Starting Fund Transfer Service in {} mode", env);

    let ledger = Arc::new(Ledger::new(app_config.accounts.clone()));
    for (account, balance) in ledger.snapshot() {
        tracing::info!(account = %account, balance, "Seeded account");
    }
    let processor = Arc::new(TransferProcessor::new(ledger));

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(gateway::run_server(&app_config.gateway, processor));

    if let Err(ref e) = result {
        tracing::error!("FATAL: {:#}", e);
    }
    result
}
