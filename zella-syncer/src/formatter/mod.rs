pub mod csv_writer;
pub mod datetime;

use serde::{Deserialize, Serialize};
use zella_data::model::trade::FuturesTrade;

use self::datetime::journal_date_time;

pub const SPREAD_CRYPTO: &str = "Crypto";

/*----- */
// Trade Csv Record
/*----- */
/// One row of the trade journal import. Field order is the column order.
///
/// Commission is passed through exactly as charged, in whatever asset the
/// venue reported; no conversion to a settlement asset happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeCsvRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Buy/Sell")]
    pub side: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Spread")]
    pub spread: String,
    #[serde(rename = "Expiration")]
    pub expiration: String,
    #[serde(rename = "Strike")]
    pub strike: String,
    #[serde(rename = "Call/Put")]
    pub call_put: String,
    #[serde(rename = "Commission")]
    pub commission: String,
    #[serde(rename = "Fees")]
    pub fees: String,
}

impl From<&FuturesTrade> for TradeCsvRecord {
    fn from(trade: &FuturesTrade) -> Self {
        let journal_time = journal_date_time(trade.time);

        Self {
            date: journal_time.date,
            time: journal_time.time,
            symbol: trade.symbol.clone(),
            side: trade.side.to_string(),
            quantity: trade.qty.clone(),
            price: trade.price.clone(),
            spread: SPREAD_CRYPTO.to_owned(),
            // Options only columns
            expiration: String::new(),
            strike: String::new(),
            call_put: String::new(),
            commission: trade.commission.clone(),
            fees: String::new(),
        }
    }
}

pub fn to_csv_records(trades: &[FuturesTrade]) -> Vec<TradeCsvRecord> {
    trades.iter().map(TradeCsvRecord::from).collect()
}

/*----- */
// Tests
/*----- */
