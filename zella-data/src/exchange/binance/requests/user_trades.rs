use serde::Serialize;
use std::borrow::Cow;

use crate::{
    error::RequestBuildError, model::trade::FuturesTrade,
    protocols::http::rest_request::RestRequest,
};

/*----- */
// Binance Futures User Trades
/*----- */
#[derive(Debug, Serialize)]
pub struct BinanceUserTrades {
    pub symbol: String,
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl BinanceUserTrades {
    pub fn builder() -> BinanceUserTradesBuilder {
        BinanceUserTradesBuilder::default()
    }
}

impl RestRequest for BinanceUserTrades {
    type Response = Vec<FuturesTrade>;
    type QueryParams = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/fapi/v1/userTrades")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }

    fn query_params(&self) -> Option<&Self> {
        Some(self)
    }
}

/*----- */
// Binance Futures User Trades Builder
/*----- */
#[derive(Debug, Default)]
pub struct BinanceUserTradesBuilder {
    pub symbol: Option<String>,
    pub start_time: Option<u64>,
    pub limit: Option<u32>,
}

impl BinanceUserTradesBuilder {
    pub fn symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..self
        }
    }

    pub fn start_time(self, start_time: Option<u64>) -> Self {
        Self { start_time, ..self }
    }

    pub fn limit(self, limit: Option<u32>) -> Self {
        Self { limit, ..self }
    }

    pub fn build(self) -> Result<BinanceUserTrades, RequestBuildError> {
        let symbol = self
            .symbol
            .filter(|symbol| !symbol.is_empty())
            .ok_or(RequestBuildError::MandatoryField {
                exchange: "Binance",
                request: "futures user trades",
                field: "symbol",
            })?;

        Ok(BinanceUserTrades {
            symbol: symbol.to_uppercase(),
            start_time: self.start_time,
            limit: self.limit,
        })
    }
}

/*----- */
// Tests
/*----- */
