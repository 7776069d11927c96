use std::sync::Arc;

use futures::{stream::FuturesUnordered, StreamExt};
use tracing::{error, info};
use zella_data::{
    error::SocketError,
    exchange::{TradeVenue, UserTradesQuery},
    model::trade::FuturesTrade,
};

use crate::checkpoint::CheckpointMap;

/// Single page per symbol, no pagination past this.
pub const FUTURES_TRADES_PAGE_LIMIT: u32 = 500;

/*----- */
// Symbol Trades
/*----- */
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Vec<FuturesTrade>),
    /// The venue call failed; the symbol contributes no trades this cycle.
    Degraded(SocketError),
}

#[derive(Debug)]
pub struct SymbolTrades {
    pub symbol: String,
    pub outcome: FetchOutcome,
}

impl SymbolTrades {
    pub fn fetched(symbol: impl Into<String>, trades: Vec<FuturesTrade>) -> Self {
        Self {
            symbol: symbol.into(),
            outcome: FetchOutcome::Fetched(trades),
        }
    }

    pub fn degraded(symbol: impl Into<String>, error: SocketError) -> Self {
        Self {
            symbol: symbol.into(),
            outcome: FetchOutcome::Degraded(error),
        }
    }

    pub fn trades(&self) -> &[FuturesTrade] {
        match &self.outcome {
            FetchOutcome::Fetched(trades) => trades,
            FetchOutcome::Degraded(_) => &[],
        }
    }

    pub fn into_trades(self) -> Vec<FuturesTrade> {
        match self.outcome {
            FetchOutcome::Fetched(trades) => trades,
            FetchOutcome::Degraded(_) => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Degraded(_))
    }

    pub fn max_time(&self) -> Option<u64> {
        self.trades().iter().map(|trade| trade.time).max()
    }
}

/*----- */
// Trade Fetcher
/*----- */
pub struct TradeFetcher {
    venue: Arc<dyn TradeVenue>,
    symbols: Vec<String>,
    page_size: u32,
}

impl TradeFetcher {
    pub fn new(venue: Arc<dyn TradeVenue>, symbols: Vec<String>) -> Self {
        Self {
            venue,
            symbols,
            page_size: FUTURES_TRADES_PAGE_LIMIT,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Queries every configured symbol concurrently and joins the results in
    /// completion order. With a checkpoint, a known symbol starts one
    /// millisecond after its last seen trade; unknown symbols and `None` are
    /// unbounded.
    pub async fn fetch_all(&self, checkpoint: Option<&CheckpointMap>) -> Vec<SymbolTrades> {
        self.symbols
            .iter()
            .map(|symbol| {
                let start_time = checkpoint.and_then(|checkpoint| checkpoint.next_start_time(symbol));
                self.fetch_symbol(symbol, start_time)
            })
            .collect::<FuturesUnordered<_>>()
            .collect::<Vec<_>>()
            .await
    }

    async fn fetch_symbol(&self, symbol: &str, start_time: Option<u64>) -> SymbolTrades {
        info!(%symbol, ?start_time, "fetching futures trades");

        let query = UserTradesQuery::new(symbol)
            .start_time(start_time)
            .limit(self.page_size);

        match self.venue.futures_user_trades(query).await {
            Ok(trades) => {
                info!(%symbol, count = trades.len(), "fetched futures trades");
                SymbolTrades::fetched(symbol, trades)
            }
            Err(error) => {
                error!(%symbol, %error, "failed to fetch futures trades, returning none for symbol");
                SymbolTrades::degraded(symbol, error)
            }
        }
    }
}

/*----- */
// Tests
/*----- */
