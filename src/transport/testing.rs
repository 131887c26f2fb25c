//! Scripted transport for driving the fetch and walk layers in tests

use super::types::Transport;
use crate::error::Result;
use crate::types::{Trade, TradeBatch, TradeSide};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// One recorded transport call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub timeout: Duration,
    pub at: Instant,
}

/// Transport fake that replays a queue of scripted outcomes and records
/// every call it receives. Calls past the end of the script return an
/// empty batch, which reads as end-of-data to the walker.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Result<TradeBatch>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: impl IntoIterator<Item = Result<TradeBatch>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.url.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<TradeBatch> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            timeout,
            at: Instant::now(),
        });

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Minimal trade with the given id, for building scripted pages
pub fn trade(tid: u64) -> Trade {
    Trade {
        tid,
        date: 1_373_123_005,
        side: TradeSide::Sell,
        price: 196.52,
        amount: 0.01,
    }
}
