//! Transfer wire types
//!
//! Field names match the RPC contract:
//! request `{transaction_id, source_account, destination_account, amount, currency, transfer_type}`,
//! response `{transaction_id, status, message}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::error::TransferError;

/// Message returned on every successful transfer
pub const SUCCESS_MESSAGE: &str = "Fund transfer processed successfully";

/// Transfer direction
///
/// Closed set. Any other wire value is rejected at deserialization instead of
/// being treated as `credit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    /// Amount moves from source to destination
    Debit,
    /// Amount moves from destination to source
    Credit,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Debit => "debit",
            TransferType::Credit => "credit",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported transfer type: {0:?} (expected \"debit\" or \"credit\")")]
pub struct UnknownTransferType(pub String);

impl FromStr for TransferType {
    type Err = UnknownTransferType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(TransferType::Debit),
            "credit" => Ok(TransferType::Credit),
            other => Err(UnknownTransferType(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TransferType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One transfer intent, immutable once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Caller-supplied id, echoed back. Not used for deduplication.
    #[schema(example = "TXN12345")]
    pub transaction_id: String,
    #[schema(example = "accountA")]
    pub source_account: String,
    #[schema(example = "accountB")]
    pub destination_account: String,
    #[schema(example = 100.0)]
    pub amount: f64,
    /// Advisory only; single-currency ledger
    #[schema(example = "USD")]
    pub currency: String,
    pub transfer_type: TransferType,
}

impl TransferRequest {
    pub fn new(
        transaction_id: impl Into<String>,
        source_account: impl Into<String>,
        destination_account: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        transfer_type: TransferType,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            source_account: source_account.into(),
            destination_account: destination_account.into(),
            amount,
            currency: currency.into(),
            transfer_type,
        }
    }

    /// Boundary checks applied before a request reaches the processor.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.amount.is_finite() {
            return Err("Amount must be a finite number");
        }
        if self.amount <= 0.0 {
            return Err("Amount must be greater than zero");
        }
        Ok(())
    }
}

/// Outcome status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    Success,
    Failed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Success => "SUCCESS",
            TransferStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one request; built fresh per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    #[schema(example = "TXN12345")]
    pub transaction_id: String,
    pub status: TransferStatus,
    #[schema(example = "Fund transfer processed successfully")]
    pub message: String,
}

impl TransferResponse {
    pub fn success(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            status: TransferStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(transaction_id: impl Into<String>, error: TransferError) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            status: TransferStatus::Failed,
            message: error.to_string(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == TransferStatus::Success
    }
}
