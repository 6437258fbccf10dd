//! Ledger Store - in-memory account balances behind one exclusive lock.
//!
//! The balance table is never handed out directly. Every read and write goes
//! through a [`LedgerGuard`], so a check-then-act sequence (read a balance,
//! then adjust it) runs under a single, continuously held lock:
//!
//! ```text
//! Ledger::lock() ──▶ LedgerGuard ──▶ get() / apply_delta() ──▶ drop (unlock)
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Account identifier (opaque string key)
pub type AccountId = String;

/// Authoritative in-memory table of account balances.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Mutex<HashMap<AccountId, f64>>,
}

impl Ledger {
    /// Build a ledger from a seed set of `(account, balance)` pairs.
    pub fn new<I, K>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<AccountId>,
    {
        let accounts = seed.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    /// Acquire the exclusive lock.
    ///
    /// The lock is released when the returned guard is dropped, on every
    /// exit path of the caller.
    pub fn lock(&self) -> LedgerGuard<'_> {
        // Entries are plain f64 values, so a poisoned table is still consistent.
        let inner = self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        LedgerGuard { inner }
    }

    /// Read one balance under its own short lock.
    pub fn balance(&self, account: &str) -> Option<f64> {
        self.lock().get(account)
    }

    /// Consistent copy of every balance, sorted by account id.
    pub fn snapshot(&self) -> Vec<(AccountId, f64)> {
        let guard = self.lock();
        let mut balances: Vec<_> = guard
            .inner
            .iter()
            .map(|(account, balance)| (account.clone(), *balance))
            .collect();
        balances.sort_by(|a, b| a.0.cmp(&b.0));
        balances
    }

    /// Number of known accounts
    pub fn len(&self) -> usize {
        self.lock().inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped access to the balance table while the ledger lock is held.
pub struct LedgerGuard<'a> {
    inner: MutexGuard<'a, HashMap<AccountId, f64>>,
}

impl LedgerGuard<'_> {
    /// Look up an account balance. Absence is an expected outcome, not a fault.
    #[inline]
    pub fn get(&self, account: &str) -> Option<f64> {
        self.inner.get(account).copied()
    }

    /// Add `delta` (positive or negative) to an account balance in place.
    ///
    /// No validation happens here; callers check existence and funds first.
    /// Unknown accounts are left untouched.
    #[inline]
    pub fn apply_delta(&mut self, account: &str, delta: f64) {
        if let Some(balance) = self.inner.get_mut(account) {
            *balance += delta;
        }
    }
}
