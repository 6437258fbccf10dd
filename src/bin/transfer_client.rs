//! Fund transfer client
//!
//! Sends one transfer to a running gateway and logs the outcome.
//!
//! Usage:
//!   transfer_client [--env dev] [--endpoint http://localhost:50051]
//!                   [--txn TXN12345] [--from accountA] [--to accountB]
//!                   [--amount 100.0] [--currency USD] [--type debit]

use std::time::Duration;

use anyhow::Context;
use driftmark::config::{AppConfig, ClientConfig};
use driftmark::transfer::{TransferRequest, TransferType};
use driftmark::{TransferClient, logging};

fn arg_value(args: &[String], names: &[&str]) -> Option<String> {
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    logging::init_console_logging("info");

    // Fall back to built-in defaults when no config file is present.
    let env = arg_value(&args, &["--env", "-e"]).unwrap_or_else(|| "dev".to_string());
    let client_config = match AppConfig::load(&env) {
        Ok(config) => config.client,
        Err(e) => {
            tracing::warn!("{:#}; using default client settings", e);
            ClientConfig::default()
        }
    };

    let endpoint = arg_value(&args, &["--endpoint"]).unwrap_or(client_config.endpoint);
    let amount: f64 = match arg_value(&args, &["--amount"]) {
        Some(s) => s.parse().with_context(|| format!("Invalid --amount: {}", s))?,
        None => 100.0,
    };
    let transfer_type: TransferType = match arg_value(&args, &["--type"]) {
        Some(s) => s.parse()?,
        None => TransferType::Debit,
    };

    let req = TransferRequest::new(
        arg_value(&args, &["--txn"]).unwrap_or_else(|| "TXN12345".to_string()),
        arg_value(&args, &["--from"]).unwrap_or_else(|| "accountA".to_string()),
        arg_value(&args, &["--to"]).unwrap_or_else(|| "accountB".to_string()),
        amount,
        arg_value(&args, &["--currency"]).unwrap_or_else(|| "USD".to_string()),
        transfer_type,
    );

    let client = TransferClient::new(endpoint, Duration::from_millis(client_config.timeout_ms))?;
    tracing::info!(?req, "Initiating fund transfer");

    let rt = tokio::runtime::Runtime::new()?;
    let res = rt
        .block_on(client.process_fund_transfer(&req))
        .context("Error during fund transfer")?;

    tracing::info!(
        transaction_id = %res.transaction_id,
        status = %res.status,
        message = %res.message,
        "Fund Transfer Response"
    );
    Ok(())
}
