use std::sync::Arc;
use std::time::Instant;

use crate::ledger::Ledger;
use crate::transfer::TransferProcessor;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Transfer processor (owns the ledger handle)
    pub processor: Arc<TransferProcessor>,
    /// Process start, reported by health check
    pub started_at: Instant,
}

impl AppState {
    pub fn new(processor: Arc<TransferProcessor>) -> Self {
        Self {
            processor,
            started_at: Instant::now(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        self.processor.ledger()
    }
}
