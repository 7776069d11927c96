use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::SocketError,
    exchange::{TradeVenue, UserTradesQuery},
    model::trade::FuturesTrade,
    protocols::http::client::RestClient,
};

use super::{
    auth::{BinanceAuthParams, BinanceRequestBuilder},
    requests::{user_trades::BinanceUserTrades, BinanceFuturesParser},
};

/*----- */
// Convenient types
/*----- */
type BinanceFuturesRestClient = RestClient<BinanceFuturesParser, BinanceRequestBuilder>;
pub const BINANCE_FUTURES_BASE_URL: &str = "https://fapi.binance.com";

/*----- */
// Binance USD-M Futures Private Data
/*----- */
#[derive(Debug)]
pub struct BinanceFuturesClient {
    pub http_client: BinanceFuturesRestClient,
}

impl BinanceFuturesClient {
    pub fn new(auth: BinanceAuthParams) -> Self {
        Self::with_base_url(BINANCE_FUTURES_BASE_URL, auth)
    }

    pub fn with_base_url(base_url: impl Into<String>, auth: BinanceAuthParams) -> Self {
        let http_client = RestClient::new(
            base_url,
            BinanceFuturesParser,
            BinanceRequestBuilder::new(auth),
        );
        Self { http_client }
    }
}

#[async_trait]
impl TradeVenue for BinanceFuturesClient {
    async fn futures_user_trades(
        &self,
        query: UserTradesQuery,
    ) -> Result<Vec<FuturesTrade>, SocketError> {
        let request = BinanceUserTrades::builder()
            .symbol(query.symbol)
            .start_time(query.start_time)
            .limit(query.limit)
            .build()?;

        debug!(
            symbol = %request.symbol,
            start_time = ?request.start_time,
            limit = ?request.limit,
            "requesting binance futures user trades"
        );

        self.http_client.execute(request).await
    }
}

/*----- */
// Tests
/*----- */
