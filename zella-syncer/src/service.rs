use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use zella_data::{exchange::binance::futures_client::BinanceFuturesClient, model::trade::FuturesTrade};

use crate::{
    checkpoint::{json_file::JsonFileCheckpointStore, CheckpointStore},
    config::SyncerConfig,
    error::SyncerError,
    fetcher::{SymbolTrades, TradeFetcher},
    formatter::{to_csv_records, TradeCsvRecord},
};

/*----- */
// Day Bounds
/*----- */
/// Inclusive `[00:00:00.000, 23:59:59.999]` of a calendar day, taken in UTC.
///
/// Rendering later happens in America/New_York, so a day selected here does
/// not line up with the dates printed in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayBounds {
    /// Parses `YYYYMMDD`.
    pub fn parse(date: &str) -> Result<Self, SyncerError> {
        let invalid = || SyncerError::InvalidDateFormat {
            date: date.to_owned(),
        };

        if date.len() != 8 || !date.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = date[0..4].parse::<i32>().map_err(|_| invalid())?;
        let month = date[4..6].parse::<u32>().map_err(|_| invalid())?;
        let day = date[6..8].parse::<u32>().map_err(|_| invalid())?;
        let day = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        let start = day.and_hms_milli_opt(0, 0, 0, 0).ok_or_else(invalid)?;
        let end = day.and_hms_milli_opt(23, 59, 59, 999).ok_or_else(invalid)?;

        Ok(Self {
            start_ms: start.and_utc().timestamp_millis(),
            end_ms: end.and_utc().timestamp_millis(),
        })
    }

    pub fn contains(&self, epoch_ms: u64) -> bool {
        i64::try_from(epoch_ms).is_ok_and(|time| time >= self.start_ms && time <= self.end_ms)
    }
}

/*----- */
// Trade Service
/*----- */
pub struct TradeService {
    fetcher: TradeFetcher,
    checkpoints: Arc<dyn CheckpointStore>,
}

impl TradeService {
    pub fn new(fetcher: TradeFetcher, checkpoints: Arc<dyn CheckpointStore>) -> Self {
        Self {
            fetcher,
            checkpoints,
        }
    }

    pub fn from_config(config: &SyncerConfig) -> Self {
        let venue = BinanceFuturesClient::with_base_url(
            config.binance_futures_url.clone(),
            config.binance_auth.clone(),
        );
        let fetcher = TradeFetcher::new(Arc::new(venue), config.trading_pairs.clone());
        let checkpoints = JsonFileCheckpointStore::new(config.checkpoint_path.clone());

        Self::new(fetcher, Arc::new(checkpoints))
    }

    /// Trades newer than the stored checkpoint, advancing the checkpoint.
    ///
    /// The checkpoint is written before the rows are rendered, so a rendering
    /// failure drops those rows from the latest stream.
    pub async fn get_latest_trades(&self) -> Result<Vec<TradeCsvRecord>, SyncerError> {
        let checkpoints = self.checkpoints.read();
        let trades_by_symbol = self.fetcher.fetch_all(Some(&checkpoints)).await;

        self.checkpoints.write(&trades_by_symbol);

        let trades = flatten(trades_by_symbol);
        info!(count = trades.len(), "latest trades fetched");

        Ok(to_csv_records(&trades))
    }

    /// All fetched trades on the given UTC day. Does not touch the checkpoint.
    pub async fn get_trades_by_date(&self, date: &str) -> Result<Vec<TradeCsvRecord>, SyncerError> {
        let bounds = DayBounds::parse(date).inspect_err(|error| {
            warn!(%date, %error, "rejected trades by date request");
        })?;

        let trades_by_symbol = self.fetcher.fetch_all(None).await;
        let trades = flatten(trades_by_symbol)
            .into_iter()
            .filter(|trade| bounds.contains(trade.time))
            .collect::<Vec<_>>();

        info!(%date, count = trades.len(), "trades by date fetched");

        Ok(to_csv_records(&trades))
    }
}

// Keeps per-symbol completion order, no global time sort
fn flatten(trades_by_symbol: Vec<SymbolTrades>) -> Vec<FuturesTrade> {
    trades_by_symbol
        .into_iter()
        .flat_map(SymbolTrades::into_trades)
        .collect()
}

/*----- */
// Tests
/*----- */
