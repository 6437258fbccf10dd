//! Fund Transfer
//!
//! Validates a transfer request against the [`Ledger`](crate::ledger::Ledger)
//! and applies the balance adjustment.
//!
//! # State Machine
//!
//! ```text
//! Request ─▶ Validated ─▶ Applied (SUCCESS)
//!    │
//!    ├─▶ RejectedNotFound          (FAILED)
//!    └─▶ RejectedInsufficientFunds (FAILED)
//! ```
//!
//! There is no in-flight or retry state: the whole transition happens inside
//! one held ledger lock.

pub mod error;
pub mod processor;
pub mod types;

// Re-exports for convenience
pub use error::TransferError;
pub use processor::TransferProcessor;
pub use types::{
    SUCCESS_MESSAGE, TransferRequest, TransferResponse, TransferStatus, TransferType,
    UnknownTransferType,
};
