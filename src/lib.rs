//! Driftmark - Fund Transfer Service
//!
//! A fund-transfer RPC over an in-memory account ledger.
//!
//! # Modules
//!
//! - [`ledger`] - Ledger Store (balances behind one exclusive lock)
//! - [`transfer`] - Transfer Processor (validation + balance mutation)
//! - [`gateway`] - HTTP/JSON RPC transport (axum)
//! - [`client`] - RPC client with bounded deadline
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core
pub mod ledger;
pub mod transfer;

// Boundary
pub mod client;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use client::{ClientError, TransferClient};
pub use config::AppConfig;
pub use ledger::{AccountId, Ledger, LedgerGuard};
pub use transfer::{
    TransferError, TransferProcessor, TransferRequest, TransferResponse, TransferStatus,
    TransferType,
};
