use std::path::PathBuf;

use zella_data::exchange::binance::{
    auth::BinanceAuthParams, futures_client::BINANCE_FUTURES_BASE_URL,
};

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8800;
pub const DEFAULT_CHECKPOINT_PATH: &str = "data/latest-trade-times.json";

/*----- */
// Syncer Config
/*----- */
#[derive(Debug, Clone)]
pub struct SyncerConfig {
    pub host: String,
    pub port: u16,
    pub trading_pairs: Vec<String>,
    pub checkpoint_path: PathBuf,
    pub binance_futures_url: String,
    pub binance_auth: BinanceAuthParams,
}

impl SyncerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty("BINANCE_API_KEY").ok_or(ConfigError::MissingVar("BINANCE_API_KEY"))?;
        let api_secret =
            non_empty("BINANCE_API_SECRET").ok_or(ConfigError::MissingVar("BINANCE_API_SECRET"))?;

        let port = match non_empty("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|error| ConfigError::InvalidVar {
                    var: "PORT",
                    reason: error.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            trading_pairs: non_empty("TRADING_PAIRS")
                .map(|pairs| parse_trading_pairs(&pairs))
                .unwrap_or_default(),
            checkpoint_path: non_empty("CHECKPOINT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKPOINT_PATH)),
            binance_futures_url: non_empty("BINANCE_FUTURES_URL")
                .unwrap_or_else(|| BINANCE_FUTURES_BASE_URL.to_owned()),
            binance_auth: BinanceAuthParams::new(api_key, api_secret),
        })
    }
}

// "BTCUSDT, ETHUSDT," -> ["BTCUSDT", "ETHUSDT"]
pub fn parse_trading_pairs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/*----- */
// Tests
/*----- */
