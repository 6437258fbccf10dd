// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use driftmark::gateway;
use driftmark::transfer::{TransferRequest, TransferType};
use driftmark::{Ledger, TransferClient, TransferProcessor};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Gateway running on an ephemeral localhost port
pub struct TestServer {
    pub base_url: String,
    pub ledger: Arc<Ledger>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn client(&self) -> TransferClient {
        TransferClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    pub fn balances(&self) -> (Option<f64>, Option<f64>) {
        (
            self.ledger.balance("accountA"),
            self.ledger.balance("accountB"),
        )
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

/// Start a gateway seeded with `accountA = 1000.0`, `accountB = 500.0`
pub async fn spawn_server() -> TestServer {
    spawn_server_with([("accountA", 1000.0), ("accountB", 500.0)]).await
}

pub async fn spawn_server_with<const N: usize>(seed: [(&str, f64); N]) -> TestServer {
    let ledger = Arc::new(Ledger::new(seed));
    let processor = Arc::new(TransferProcessor::new(ledger.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(gateway::serve(listener, processor, async move {
        let _ = rx.await;
    }));

    TestServer {
        base_url: format!("http://{}", addr),
        ledger,
        shutdown: Some(tx),
        handle,
    }
}

pub fn debit(txn: &str, src: &str, dst: &str, amount: f64) -> TransferRequest {
    TransferRequest::new(txn, src, dst, amount, "USD", TransferType::Debit)
}

pub fn credit(txn: &str, src: &str, dst: &str, amount: f64) -> TransferRequest {
    TransferRequest::new(txn, src, dst, amount, "USD", TransferType::Credit)
}
