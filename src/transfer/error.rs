//! Transfer Error Types
//!
//! Business rejections of a transfer request. These are expected outcomes,
//! reported back to the caller as a `FAILED` response, never process faults.

use thiserror::Error;

/// Transfer rejection reasons
///
/// `Display` strings are part of the wire contract and must stay stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("Source account not found")]
    SourceAccountNotFound,

    #[error("Destination account not found")]
    DestinationAccountNotFound,

    #[error("Insufficient funds in source account")]
    InsufficientFunds,
}

impl TransferError {
    /// Stable machine-readable code, used in log events
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::SourceAccountNotFound => "SOURCE_ACCOUNT_NOT_FOUND",
            TransferError::DestinationAccountNotFound => "DESTINATION_ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
        }
    }

    /// True for the "not found" class of rejections
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TransferError::SourceAccountNotFound | TransferError::DestinationAccountNotFound
        )
    }
}
