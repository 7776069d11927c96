pub mod user_trades;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{error::SocketError, protocols::http::http_parser::HttpParser};

/*----- */
// Binance Error Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}

// -1022 bad signature, -2014 malformed key, -2015 key/IP/permission rejected
const BINANCE_AUTH_ERROR_CODES: [i64; 3] = [-1022, -2014, -2015];

/*----- */
// Binance Futures Parser
/*----- */
#[derive(Debug, Default)]
pub struct BinanceFuturesParser;

impl HttpParser for BinanceFuturesParser {
    type ApiError = BinanceErrorResponse;
    type OutputError = SocketError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        match api_error.code {
            code if BINANCE_AUTH_ERROR_CODES.contains(&code) => SocketError::Unauthorised(
                format!("Binance rejected credentials ({}): {}", code, api_error.msg),
            ),
            code => SocketError::ExchangeApi {
                exchange: "Binance",
                status,
                code,
                msg: api_error.msg,
            },
        }
    }
}

/*----- */
// Tests
/*----- */
