use std::fmt;

use serde::Deserialize;

/*----- */
// Side
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
}

impl AsRef<str> for Side {
    fn as_ref(&self) -> &str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/*----- */
// Futures Trade
/*----- */
/// One executed fill from the USD-M futures account trade list.
///
/// Decimal fields stay as the venue's strings so nothing downstream changes
/// their precision or formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FuturesTrade {
    pub symbol: String,
    pub id: u64,
    #[serde(alias = "orderId")]
    pub order_id: u64,
    pub side: Side,
    pub price: String,
    pub qty: String,
    #[serde(alias = "quoteQty", default)]
    pub quote_qty: String,
    #[serde(alias = "realizedPnl", default)]
    pub realized_pnl: String,
    pub commission: String,
    #[serde(alias = "commissionAsset")]
    pub commission_asset: String,
    /// Epoch milliseconds
    pub time: u64,
    #[serde(alias = "positionSide", default)]
    pub position_side: Option<String>,
    #[serde(default)]
    pub buyer: bool,
    #[serde(default)]
    pub maker: bool,
}
