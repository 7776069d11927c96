pub mod binance;

use async_trait::async_trait;

use crate::{error::SocketError, model::trade::FuturesTrade};

/*----- */
// User Trades Query
/*----- */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTradesQuery {
    pub symbol: String,
    /// Inclusive lower bound in epoch milliseconds, venue default window when `None`
    pub start_time: Option<u64>,
    pub limit: Option<u32>,
}

impl UserTradesQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            start_time: None,
            limit: None,
        }
    }

    pub fn start_time(self, start_time: Option<u64>) -> Self {
        Self { start_time, ..self }
    }

    pub fn limit(self, limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
}

/*----- */
// Trade Venue
/*----- */
// The account-level trade history a venue exposes. One call is one bounded
// request/response; implementations must not retry or paginate.
#[async_trait]
pub trait TradeVenue: Send + Sync {
    async fn futures_user_trades(
        &self,
        query: UserTradesQuery,
    ) -> Result<Vec<FuturesTrade>, SocketError>;
}
