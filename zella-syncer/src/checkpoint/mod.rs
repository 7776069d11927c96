pub mod in_memory;
pub mod json_file;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::fetcher::SymbolTrades;

/*----- */
// Checkpoint Map
/*----- */
/// Last seen trade time (epoch ms) per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointMap(BTreeMap<String, u64>);

impl CheckpointMap {
    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.0.get(symbol).copied()
    }

    pub fn next_start_time(&self, symbol: &str) -> Option<u64> {
        self.get(symbol).map(|time| time.saturating_add(1))
    }

    /// Moves the checkpoint forward, never backwards. Returns true if it moved.
    pub fn advance(&mut self, symbol: &str, time: u64) -> bool {
        match self.0.get_mut(symbol) {
            Some(current) if *current >= time => false,
            Some(current) => {
                *current = time;
                true
            }
            None => {
                self.0.insert(symbol.to_owned(), time);
                true
            }
        }
    }

    pub fn advance_from(&mut self, trades: &[SymbolTrades]) -> bool {
        trades.iter().fold(false, |moved, symbol_trades| {
            match symbol_trades.max_time() {
                Some(max_time) => self.advance(&symbol_trades.symbol, max_time) || moved,
                None => moved,
            }
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/*----- */
// Checkpoint Errors
/*----- */
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/*----- */
// Checkpoint Store
/*----- */
// Read-modify-write of the whole map, no locking across callers. Overlapping
// cycles may re-deliver trades but never skip them.
pub trait CheckpointStore: Send + Sync {
    /// Persisted map, empty when missing or unreadable. Never fails.
    fn read(&self) -> CheckpointMap;

    fn persist(&self, checkpoints: &CheckpointMap) -> Result<(), CheckpointError>;

    /// Folds a fetch cycle into the stored map. Failures are logged, not returned.
    fn write(&self, trades: &[SymbolTrades]) {
        if trades.iter().all(|symbol_trades| symbol_trades.trades().is_empty()) {
            debug!("no trades fetched, checkpoint left untouched");
            return;
        }

        let mut checkpoints = self.read();
        let moved = checkpoints.advance_from(trades);

        match self.persist(&checkpoints) {
            Ok(()) => info!(symbols = checkpoints.len(), moved, "updated latest trade times"),
            Err(error) => error!(%error, "failed to persist latest trade times"),
        }
    }
}

/*----- */
// Tests
/*----- */
