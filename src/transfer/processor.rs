//! Transfer Processor
//!
//! Turns one [`TransferRequest`] into one [`TransferResponse`].
//!
//! # Sequence (all under one held ledger lock)
//!
//! ```text
//! lock ─▶ source exists? ─▶ destination exists? ─▶ debit funds check ─▶ apply ─▶ unlock
//!              │ no                 │ no                 │ short
//!              ▼                    ▼                    ▼
//!           FAILED               FAILED               FAILED        (no mutation)
//! ```
//!
//! The lock is global: two transfers never run their validate+apply
//! sequence concurrently, even on disjoint accounts.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::TransferError;
use super::types::{TransferRequest, TransferResponse, TransferType};
use crate::ledger::Ledger;

pub struct TransferProcessor {
    ledger: Arc<Ledger>,
}

impl TransferProcessor {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    /// Process one transfer request.
    ///
    /// Business rejections come back as a `FAILED` response; this never panics
    /// or returns an error for "not found" or "insufficient funds".
    /// The transaction id is echoed but not deduplicated: replaying a request
    /// applies it again.
    pub fn process(&self, req: &TransferRequest) -> TransferResponse {
        info!(
            transaction_id = %req.transaction_id,
            source = %req.source_account,
            destination = %req.destination_account,
            amount = req.amount,
            currency = %req.currency,
            transfer_type = %req.transfer_type,
            "Processing transfer"
        );

        match self.execute(req) {
            Ok(()) => {
                info!(transaction_id = %req.transaction_id, "Transfer successful");
                TransferResponse::success(&req.transaction_id)
            }
            Err(e) => {
                warn!(
                    transaction_id = %req.transaction_id,
                    code = e.code(),
                    "Transfer rejected: {}",
                    e
                );
                TransferResponse::failed(&req.transaction_id, e)
            }
        }
    }

    /// Validate and apply under the ledger lock.
    ///
    /// Nothing is written until both accounts exist and, for `debit`, the
    /// source covers the amount. `credit` has no floor check, so the
    /// destination may go negative.
    fn execute(&self, req: &TransferRequest) -> Result<(), TransferError> {
        let mut ledger = self.ledger.lock();

        let source_balance = ledger
            .get(&req.source_account)
            .ok_or(TransferError::SourceAccountNotFound)?;
        ledger
            .get(&req.destination_account)
            .ok_or(TransferError::DestinationAccountNotFound)?;

        if req.transfer_type == TransferType::Debit && source_balance < req.amount {
            return Err(TransferError::InsufficientFunds);
        }

        let source_delta = match req.transfer_type {
            TransferType::Debit => -req.amount,
            TransferType::Credit => req.amount,
        };
        ledger.apply_delta(&req.source_account, source_delta);
        ledger.apply_delta(&req.destination_account, -source_delta);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::types::{SUCCESS_MESSAGE, TransferStatus};

    fn demo_processor() -> TransferProcessor {
        let ledger = Ledger::new([("accountA", 1000.0), ("accountB", 500.0)]);
        TransferProcessor::new(Arc::new(ledger))
    }

    fn debit(txn: &str, src: &str, dst: &str, amount: f64) -> TransferRequest {
        TransferRequest::new(txn, src, dst, amount, "USD", TransferType::Debit)
    }

    fn credit(txn: &str, src: &str, dst: &str, amount: f64) -> TransferRequest {
        TransferRequest::new(txn, src, dst, amount, "USD", TransferType::Credit)
    }

    fn balances(p: &TransferProcessor) -> (Option<f64>, Option<f64>) {
        (
            p.ledger().balance("accountA"),
            p.ledger().balance("accountB"),
        )
    }

    #[test]
    fn test_debit_success() {
        let p = demo_processor();
        let resp = p.process(&debit("TXN12345", "accountA", "accountB", 100.0));

        assert_eq!(resp.transaction_id, "TXN12345");
        assert_eq!(resp.status, TransferStatus::Success);
        assert_eq!(resp.message, SUCCESS_MESSAGE);
        assert_eq!(balances(&p), (Some(900.0), Some(600.0)));
    }

    #[test]
    fn test_debit_conserves_total() {
        let p = demo_processor();
        for (i, amount) in [1.0, 250.0, 0.5, 748.5].into_iter().enumerate() {
            let (a, b) = balances(&p);
            let before = a.unwrap() + b.unwrap();
            let resp = p.process(&debit(&format!("T{i}"), "accountA", "accountB", amount));
            assert!(resp.is_success());
            let (a2, b2) = balances(&p);
            assert_eq!(a2.unwrap(), a.unwrap() - amount);
            assert_eq!(b2.unwrap(), b.unwrap() + amount);
            assert_eq!(a2.unwrap() + b2.unwrap(), before);
        }
        assert_eq!(balances(&p), (Some(0.0), Some(1500.0)));
    }

    #[test]
    fn test_debit_exact_balance_allowed() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "accountB", "accountA", 500.0));
        assert!(resp.is_success());
        assert_eq!(balances(&p), (Some(1500.0), Some(0.0)));
    }

    #[test]
    fn test_insufficient_funds() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "accountA", "accountB", 5000.0));

        assert_eq!(resp.status, TransferStatus::Failed);
        assert_eq!(resp.message, "Insufficient funds in source account");
        assert_eq!(resp.transaction_id, "T1");
        assert_eq!(balances(&p), (Some(1000.0), Some(500.0)));
    }

    #[test]
    fn test_source_not_found() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "unknown", "accountB", 10.0));

        assert_eq!(resp.status, TransferStatus::Failed);
        assert_eq!(resp.message, "Source account not found");
        assert_eq!(balances(&p), (Some(1000.0), Some(500.0)));
    }

    #[test]
    fn test_source_checked_before_destination() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "ghost-src", "ghost-dst", 10.0));
        assert_eq!(resp.message, "Source account not found");

        let resp = p.process(&credit("T2", "ghost-src", "ghost-dst", 10.0));
        assert_eq!(resp.message, "Source account not found");
    }

    #[test]
    fn test_destination_not_found_no_partial_apply() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "accountA", "unknown", 10.0));

        assert_eq!(resp.status, TransferStatus::Failed);
        assert_eq!(resp.message, "Destination account not found");
        assert_eq!(balances(&p), (Some(1000.0), Some(500.0)));
    }

    #[test]
    fn test_not_found_takes_precedence_over_insufficient_funds() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "accountA", "unknown", 1_000_000.0));
        assert_eq!(resp.message, "Destination account not found");
    }

    #[test]
    fn test_credit_is_inverse_of_debit() {
        let p = demo_processor();
        let resp = p.process(&credit("T1", "accountA", "accountB", 100.0));
        assert!(resp.is_success());
        assert_eq!(balances(&p), (Some(1100.0), Some(400.0)));
    }

    #[test]
    fn test_credit_has_no_floor_check() {
        // Credit drives the destination negative; only debit checks funds.
        let p = demo_processor();
        let resp = p.process(&credit("T1", "accountA", "accountB", 5000.0));
        assert!(resp.is_success());
        assert_eq!(balances(&p), (Some(6000.0), Some(-4500.0)));
    }

    #[test]
    fn test_replayed_transaction_id_applies_twice() {
        let p = demo_processor();
        let req = debit("TXN-DUP", "accountA", "accountB", 100.0);

        assert!(p.process(&req).is_success());
        assert!(p.process(&req).is_success());
        assert_eq!(balances(&p), (Some(800.0), Some(700.0)));
    }

    #[test]
    fn test_same_account_debit_is_net_zero() {
        let p = demo_processor();
        let resp = p.process(&debit("T1", "accountA", "accountA", 100.0));
        assert!(resp.is_success());
        assert_eq!(p.ledger().balance("accountA"), Some(1000.0));
    }

    #[test]
    fn test_float_arithmetic_is_plain_binary() {
        // f64 balances: 0.1 steps are not exact. Not suitable for real currency.
        let p = demo_processor();
        for i in 0..3 {
            assert!(p.process(&debit(&format!("T{i}"), "accountA", "accountB", 0.1)).is_success());
        }
        let a = p.ledger().balance("accountA").unwrap();
        assert!((a - 999.7).abs() < 1e-9);
    }

    #[test]
    fn test_concurrent_debits_no_lost_updates() {
        const N: usize = 64;
        const AMOUNT: f64 = 10.0;

        let ledger = Arc::new(Ledger::new([("src", 1000.0), ("dst", 0.0)]));
        let p = Arc::new(TransferProcessor::new(ledger.clone()));

        std::thread::scope(|s| {
            for i in 0..N {
                let p = p.clone();
                s.spawn(move || {
                    let resp = p.process(&debit(&format!("T{i}"), "src", "dst", AMOUNT));
                    assert!(resp.is_success());
                });
            }
        });

        assert_eq!(ledger.balance("src"), Some(1000.0 - N as f64 * AMOUNT));
        assert_eq!(ledger.balance("dst"), Some(N as f64 * AMOUNT));
    }

    #[test]
    fn test_concurrent_overdraw_never_goes_negative() {
        // 20 debits of 100 against 1000: exactly 10 succeed.
        let ledger = Arc::new(Ledger::new([("src", 1000.0), ("dst", 0.0)]));
        let p = Arc::new(TransferProcessor::new(ledger.clone()));

        let successes = std::thread::scope(|s| {
            let handles: Vec<_> = (0..20)
                .map(|i| {
                    let p = p.clone();
                    s.spawn(move || p.process(&debit(&format!("T{i}"), "src", "dst", 100.0)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|r| r.is_success())
                .count()
        });

        assert_eq!(successes, 10);
        assert_eq!(ledger.balance("src"), Some(0.0));
        assert_eq!(ledger.balance("dst"), Some(1000.0));
    }
}
