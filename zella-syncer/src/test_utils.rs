/*----- */
// Test utils
/*----- */
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use zella_data::{
    error::SocketError,
    exchange::{TradeVenue, UserTradesQuery},
    model::trade::{FuturesTrade, Side},
};

pub fn trade(symbol: &str, time: u64) -> FuturesTrade {
    trade_with(symbol, time, Side::Buy, "37000.50", "0.010", "0.01480020")
}

pub fn trade_with(
    symbol: &str,
    time: u64,
    side: Side,
    price: &str,
    qty: &str,
    commission: &str,
) -> FuturesTrade {
    FuturesTrade {
        symbol: symbol.to_owned(),
        id: time,
        order_id: time / 1000,
        side,
        price: price.to_owned(),
        qty: qty.to_owned(),
        quote_qty: String::new(),
        realized_pnl: "0".to_owned(),
        commission: commission.to_owned(),
        commission_asset: "USDT".to_owned(),
        time,
        position_side: Some("BOTH".to_owned()),
        buyer: side == Side::Buy,
        maker: false,
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Trades(Vec<FuturesTrade>),
    Failure(String),
}

/// Venue double with per-symbol scripted responses. Honours `start_time` the
/// way the real endpoint does and records every query it receives.
#[derive(Debug, Default)]
pub struct MockVenue {
    scripted: Mutex<HashMap<String, Scripted>>,
    queries: Mutex<Vec<UserTradesQuery>>,
}

impl MockVenue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trades(self, symbol: &str, trades: Vec<FuturesTrade>) -> Self {
        self.set_trades(symbol, trades);
        self
    }

    pub fn with_failure(self, symbol: &str, message: &str) -> Self {
        self.scripted
            .lock()
            .insert(symbol.to_owned(), Scripted::Failure(message.to_owned()));
        self
    }

    pub fn set_trades(&self, symbol: &str, trades: Vec<FuturesTrade>) {
        self.scripted
            .lock()
            .insert(symbol.to_owned(), Scripted::Trades(trades));
    }

    pub fn queries(&self) -> Vec<UserTradesQuery> {
        self.queries.lock().clone()
    }

    pub fn query_for(&self, symbol: &str) -> Option<UserTradesQuery> {
        self.queries
            .lock()
            .iter()
            .rev()
            .find(|query| query.symbol == symbol)
            .cloned()
    }
}

#[async_trait]
impl TradeVenue for MockVenue {
    async fn futures_user_trades(
        &self,
        query: UserTradesQuery,
    ) -> Result<Vec<FuturesTrade>, SocketError> {
        self.queries.lock().push(query.clone());

        let scripted = self.scripted.lock().get(&query.symbol).cloned();
        match scripted {
            Some(Scripted::Failure(message)) => Err(SocketError::Unauthorised(message)),
            Some(Scripted::Trades(trades)) => Ok(trades
                .into_iter()
                .filter(|trade| query.start_time.map_or(true, |start| trade.time >= start))
                .take(query.limit.unwrap_or(u32::MAX) as usize)
                .collect()),
            None => Ok(Vec::new()),
        }
    }
}
